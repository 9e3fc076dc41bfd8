//! Check CLI command.
//!
//! Reports whether a window would get the close animation under the loaded
//! configuration.

use std::path::Path;

use clap::Args;
use colored::Colorize;

use super::types::{CliWindowType, WindowSize};
use crate::cli::output;
use crate::config::load_or_default;
use crate::effect::{DisappearEffect, Eligibility};
use crate::error::DisappearError;
use crate::host::WindowType;
use crate::host::sim::{SimWindow, SimulatedHost};

/// Arguments of the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Window class (`"resource-name resource-class"`).
    #[arg(value_name = "CLASS")]
    pub class: String,

    /// Window type.
    #[arg(long = "type", short, value_enum, default_value_t = CliWindowType::Normal)]
    pub window_type: CliWindowType,

    /// Treat the window as not managed by the window manager.
    #[arg(long)]
    pub unmanaged: bool,

    /// Output as JSON.
    #[arg(long, short)]
    pub json: bool,
}

/// Evaluates the eligibility of a window described by `args`.
#[must_use]
pub fn check(args: &CheckArgs, config: &crate::config::DisappearConfig) -> Eligibility {
    let host = SimulatedHost::new();
    let window = host.add_window(
        SimWindow::normal(&args.class, WindowSize::default().into())
            .with_type(WindowType::from(args.window_type))
            .with_managed(!args.unmanaged),
    );

    DisappearEffect::new(&host, config).eligibility(&host, window)
}

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if the JSON output cannot be produced.
pub fn execute(args: &CheckArgs, custom_path: Option<&Path>) -> Result<(), DisappearError> {
    let (config, _) = load_or_default(custom_path);
    let verdict = check(args, &config);

    if args.json {
        let value = serde_json::json!({
            "class": args.class,
            "eligible": verdict.is_eligible(),
            "reason": verdict.to_string(),
        });
        output::print_json(&value);
    } else if verdict.is_eligible() {
        println!("{} {} animates on close", output::format_bool(true), args.class.bold());
    } else {
        println!(
            "{} {} does not animate: {verdict}",
            output::format_bool(false),
            args.class.bold()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisappearConfig;

    fn args(class: &str) -> CheckArgs {
        CheckArgs {
            class: class.to_string(),
            window_type: CliWindowType::Normal,
            unmanaged: false,
            json: false,
        }
    }

    #[test]
    fn test_check_normal_window() {
        assert_eq!(check(&args("kate kate"), &DisappearConfig::default()), Eligibility::Eligible);
    }

    #[test]
    fn test_check_blacklisted_window() {
        let verdict = check(&args("ksplashqml ksplashqml"), &DisappearConfig::default());
        assert_eq!(verdict, Eligibility::Blacklisted);
    }

    #[test]
    fn test_check_custom_blacklist() {
        let config = DisappearConfig {
            blacklist: vec!["kate kate".to_string()],
            ..Default::default()
        };
        assert_eq!(check(&args("kate kate"), &config), Eligibility::Blacklisted);
        assert!(check(&args("ksmserver ksmserver"), &config).is_eligible());
    }

    #[test]
    fn test_check_window_type_and_managed_state() {
        let dock = CheckArgs { window_type: CliWindowType::Dock, ..args("plasmashell plasmashell") };
        assert_eq!(
            check(&dock, &DisappearConfig::default()),
            Eligibility::IgnoredType(WindowType::Dock)
        );

        let unmanaged = CheckArgs { unmanaged: true, ..args("kate kate") };
        assert_eq!(check(&unmanaged, &DisappearConfig::default()), Eligibility::Unmanaged);
    }
}

//! Config CLI commands.
//!
//! Commands for managing the Disappear configuration file.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use colored::Colorize;

use crate::cli::output;
use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{config_paths, load_or_default};
use crate::effect::EffectSettings;
use crate::error::DisappearError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    ///
    /// Creates a new configuration file at the default location with all
    /// available options commented out. This allows you to see all possible
    /// configuration options and uncomment the ones you want to use.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  disappear config init              # Create config at default location
  disappear config init --force      # Overwrite existing config
  disappear config init --path ~/my-config.jsonc  # Create at custom path
  disappear config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses ~/.config/disappear/config.jsonc
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show the resolved configuration.
    ///
    /// Loads the configuration file (or the defaults when none exists) and
    /// prints it next to the settings the effect would actually run with.
    Show {
        /// Output as JSON.
        #[arg(long, short)]
        json: bool,
    },

    /// Show the path to the configuration file.
    ///
    /// Displays the paths where Disappear looks for configuration files,
    /// and indicates which one is currently in use (if any).
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands, custom_path: Option<&Path>) -> Result<(), DisappearError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                print_config_template()
            } else {
                init_config(*force, path.clone().or_else(|| custom_path.map(Path::to_path_buf)))
            }
        }
        ConfigCommands::Show { json } => show_config(custom_path, *json),
        ConfigCommands::Path => show_config_path(custom_path),
    }
}

/// Print the configuration template to stdout.
#[allow(clippy::unnecessary_wraps)] // Consistent return type with other CLI functions
fn print_config_template() -> Result<(), DisappearError> {
    println!("{}", generate_config_template());
    Ok(())
}

/// Initialize a new configuration file.
fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<(), DisappearError> {
    let config_path = custom_path.unwrap_or_else(|| {
        // Use the first config path (preferred location)
        config_paths()
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from("config.jsonc"))
    });

    if force && config_path.is_file() {
        std::fs::remove_file(&config_path)?;
    }

    create_config_file(&config_path).map_err(|e| {
        DisappearError::ConfigError(format!("{e}\nUse --force to overwrite."))
    })?;

    println!("Configuration file created at: {}", config_path.display());
    println!("\nAll options are commented out by default.");
    println!("Edit the file and uncomment the options you want to configure.");

    Ok(())
}

/// Print the loaded configuration and the settings resolved from it.
fn show_config(custom_path: Option<&Path>, json: bool) -> Result<(), DisappearError> {
    let (config, source) = load_or_default(custom_path);
    let settings = EffectSettings::from_config(&config, 1.0);

    if json {
        let value = serde_json::json!({
            "source": source.as_ref().map(|p| p.display().to_string()),
            "config": serde_json::to_value(&config)?,
            "settings": serde_json::to_value(&settings)?,
        });
        output::print_json(&value);
        return Ok(());
    }

    match &source {
        Some(path) => println!("{} {}", "Source:".bold(), path.display()),
        None => println!("{} {}", "Source:".bold(), "built-in defaults".dimmed()),
    }
    println!();
    println!("{}", "Configuration".bold());
    output::print_json(&serde_json::to_value(&config)?);
    println!();
    println!("{}", "Effective settings".bold());
    output::print_json(&serde_json::to_value(&settings)?);

    Ok(())
}

/// Show the configuration file path.
#[allow(clippy::unnecessary_wraps)] // Consistent return type with other CLI functions
fn show_config_path(custom_path: Option<&Path>) -> Result<(), DisappearError> {
    if let Some(path) = custom_path {
        let marker = if path.exists() { " (active)" } else { " (missing)" };
        println!("Configuration file (from --config):\n");
        println!("  {}{}", path.display(), marker);
        return Ok(());
    }

    println!("Configuration file search paths (in priority order):\n");

    let paths = config_paths();
    let mut found_config = false;

    for (i, path) in paths.iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)"
        } else if exists {
            " (exists)"
        } else {
            ""
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if !found_config {
        println!("\nNo configuration file found.");
        println!("Run 'disappear config init' to create one.");
    }

    Ok(())
}

//! Watch CLI command.
//!
//! Follows the configuration file and prints the effective settings every
//! time it changes, the same way a running effect would pick them up.

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use colored::Colorize;

use crate::cli::output;
use crate::config::{config_paths, load_or_default, watch_config_file};
use crate::effect::{DisappearEffect, EffectEvent};
use crate::error::DisappearError;
use crate::host::sim::SimulatedHost;

/// Execute the watch command.
///
/// Blocks until the watcher stops.
///
/// # Errors
///
/// Returns an error if no configuration file location can be determined or
/// the settings cannot be serialized.
pub fn execute(custom_path: Option<&Path>) -> Result<(), DisappearError> {
    let (config, source) = load_or_default(custom_path);

    let path: PathBuf = match (custom_path, source) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(path)) => path,
        (None, None) => config_paths().into_iter().next().ok_or_else(|| {
            DisappearError::ConfigError("no configuration directory available".to_string())
        })?,
    };

    let host = SimulatedHost::new();
    let mut effect = DisappearEffect::new(&host, &config);

    println!("{} {}", "Watching".bold(), path.display());
    output::print_json(&serde_json::to_value(effect.settings())?);

    let (tx, rx) = mpsc::channel();
    let watcher = watch_config_file(path, tx);

    for event in rx {
        if matches!(event, EffectEvent::Reconfigure(_)) {
            effect.handle_event(&host, event);
            println!();
            println!("{}", "Configuration reloaded".green().bold());
            output::print_json(&serde_json::to_value(effect.settings())?);
        }
    }

    if watcher.join().is_err() {
        tracing::warn!("config watcher thread panicked");
    }

    Ok(())
}

//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `check` - Eligibility check for a window class
//! - `config_cmd` - Configuration file management commands
//! - `simulate` - Close animation replay on the simulated compositor
//! - `types` - Shared types used across commands
//! - `watch` - Configuration hot-reload preview

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::constants::APP_NAME;
use crate::error::DisappearError;
use crate::schema;

pub mod check;
pub mod config_cmd;
pub mod simulate;
pub mod types;
pub mod watch;

// Re-export commonly used types for convenience
pub use check::CheckArgs;
pub use config_cmd::ConfigCommands;
pub use simulate::SimulateArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Disappear CLI - Window close animation effect.
#[derive(Parser, Debug)]
#[command(name = "disappear")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Enable debug logging (overrides `RUST_LOG`).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Replay close animations on a simulated compositor.
    ///
    /// Closes one or more windows and prints the transform the effect paints
    /// for each of them, frame by frame, followed by a reference summary.
    #[command(
        after_long_help = r#"Examples:
  disappear simulate                          # One window, 16ms frames
  disappear simulate --windows 3 --json       # Three windows, JSON output
  disappear simulate --delete-at 50           # Delete the window mid-animation
  disappear simulate --class "ksmserver ksmserver"  # Blacklisted window"#
    )]
    Simulate(SimulateArgs),

    /// Check whether a window would animate on close.
    ///
    /// Evaluates the eligibility rules against the loaded configuration.
    Check(CheckArgs),

    /// Configuration file management commands.
    ///
    /// Initialize, view, and manage the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Disappear configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Disappear configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Watch the configuration file for changes.
    ///
    /// Prints the effective settings every time the configuration file is
    /// saved. Stops with Ctrl-C.
    Watch,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(disappear completions --shell zsh)"
    ///   disappear completions --shell bash > ~/.local/share/bash-completion/completions/disappear
    ///   disappear completions --shell fish > ~/.config/fish/completions/disappear.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), DisappearError> {
        let config_path = self.config_path();
        let config_path = config_path.as_deref();

        match &self.command {
            Commands::Simulate(args) => simulate::execute(args, config_path),
            Commands::Check(args) => check::execute(args, config_path),
            Commands::Config(cmd) => config_cmd::execute(cmd, config_path),
            Commands::Watch => watch::execute(config_path),

            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, APP_NAME, &mut io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::types::CliWindowType;
    use super::*;

    // ========================================================================
    // CLI parsing tests
    // ========================================================================

    #[test]
    fn test_cli_parses_schema() {
        let cli = Cli::try_parse_from(["disappear", "schema"]).unwrap();
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn test_cli_parses_watch() {
        let cli = Cli::try_parse_from(["disappear", "watch"]).unwrap();
        assert!(matches!(cli.command, Commands::Watch));
    }

    #[test]
    fn test_cli_parses_completions_zsh() {
        let cli = Cli::try_parse_from(["disappear", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parses_simulate_defaults() {
        let cli = Cli::try_parse_from(["disappear", "simulate"]).unwrap();
        match cli.command {
            Commands::Simulate(args) => {
                assert_eq!(args.windows, 1);
                assert_eq!(args.frame_ms, 16);
                assert!(args.frames.is_none());
                assert!(args.delete_at.is_none());
                assert_eq!(args.class, "kate kate");
                assert!(!args.json);
            }
            _ => panic!("Expected Simulate command"),
        }
    }

    #[test]
    fn test_cli_parses_simulate_options() {
        let cli = Cli::try_parse_from([
            "disappear",
            "simulate",
            "--windows",
            "3",
            "--frame-ms",
            "8",
            "--delete-at",
            "50",
            "--size",
            "1024x768",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate(args) => {
                assert_eq!(args.windows, 3);
                assert_eq!(args.frame_ms, 8);
                assert_eq!(args.delete_at, Some(50));
                assert!((args.size.width - 1024.0).abs() < f64::EPSILON);
                assert!(args.json);
            }
            _ => panic!("Expected Simulate command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_size() {
        assert!(Cli::try_parse_from(["disappear", "simulate", "--size", "big"]).is_err());
    }

    #[test]
    fn test_cli_parses_check() {
        let cli =
            Cli::try_parse_from(["disappear", "check", "kate kate", "--type", "dialog"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.class, "kate kate");
                assert_eq!(args.window_type, CliWindowType::Dialog);
                assert!(!args.unmanaged);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_check_requires_class() {
        assert!(Cli::try_parse_from(["disappear", "check"]).is_err());
    }

    #[test]
    fn test_cli_parses_config_show() {
        let cli = Cli::try_parse_from(["disappear", "config", "show", "--json"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Show { json }) => assert!(json),
            _ => panic!("Expected Config Show command"),
        }
    }

    #[test]
    fn test_cli_parses_config_init() {
        let cli = Cli::try_parse_from(["disappear", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Init { force, path, stdout }) => {
                assert!(force);
                assert!(path.is_none());
                assert!(!stdout);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    // ========================================================================
    // Global flag tests
    // ========================================================================

    #[test]
    fn test_cli_parses_config_flag() {
        let cli = Cli::try_parse_from(["disappear", "--config", "/path/to/config.json", "schema"])
            .unwrap();
        assert_eq!(cli.config, Some("/path/to/config.json".to_string()));
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn test_cli_parses_config_flag_after_subcommand() {
        // The --config flag is global so can appear before or after subcommand
        let cli = Cli::try_parse_from(["disappear", "simulate", "-c", "/path/to/config.json"])
            .unwrap();
        assert_eq!(cli.config_path(), Some(PathBuf::from("/path/to/config.json")));
    }

    #[test]
    fn test_cli_config_path_returns_none_when_not_specified() {
        let cli = Cli::try_parse_from(["disappear", "schema"]).unwrap();
        assert!(cli.config_path().is_none());
    }

    #[test]
    fn test_cli_parses_verbose() {
        let cli = Cli::try_parse_from(["disappear", "-v", "simulate"]).unwrap();
        assert!(cli.verbose);
        let cli = Cli::try_parse_from(["disappear", "simulate"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn test_app_version_is_not_empty() {
        assert!(!APP_VERSION.is_empty());
    }
}

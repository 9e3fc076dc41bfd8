//! Configuration types for Disappear.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{APP_NAME, DEFAULT_DURATION_MS};

/// Easing function for the close animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Linear interpolation.
    Linear,
    /// Ease in (slow start).
    EaseIn,
    /// Ease out (fast start, slow end).
    #[default]
    EaseOut,
    /// Ease in and out (slow start and end).
    EaseInOut,
    /// Exponential ease out (very fast start, slow end) - snappiest feel.
    EaseOutExpo,
}

/// Visual transform applied while a window disappears.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TransformConfig {
    /// The window recedes into the screen, as if moving away from the viewer,
    /// while drifting vertically.
    Recede {
        /// How far the window travels away from the viewer, in pixels.
        /// Default: 100
        #[serde(default = "default_distance")]
        distance: f64,

        /// Vertical drift at the end of the animation, in pixels.
        /// Positive values move the window down.
        /// Default: 20
        #[serde(default = "default_shift")]
        shift: f64,
    },

    /// The window shrinks towards its bottom edge.
    Shrink {
        /// Final scale factor (1.0 = unchanged).
        /// Default: 0.8
        #[serde(default = "default_scale")]
        scale: f64,
    },
}

const fn default_distance() -> f64 { 100.0 }

const fn default_shift() -> f64 { 20.0 }

const fn default_scale() -> f64 { 0.8 }

impl Default for TransformConfig {
    fn default() -> Self {
        Self::Recede {
            distance: default_distance(),
            shift: default_shift(),
        }
    }
}

/// Root configuration of the close animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DisappearConfig {
    /// Window classes that never animate when closed.
    /// Matched exactly against `"resource-name resource-class"`.
    pub blacklist: Vec<String>,

    /// Animation duration in milliseconds.
    /// Values of 0 or below fall back to 160.
    /// Default: 160
    pub duration: i32,

    /// Window opacity at the end of the animation (0.0 - 1.0).
    /// Default: 0.0
    pub opacity: f64,

    /// Easing function for the animation.
    /// Default: "ease-out"
    pub easing: EasingType,

    /// Transform applied while the window disappears.
    /// Default: recede
    pub transform: TransformConfig,
}

impl Default for DisappearConfig {
    fn default() -> Self {
        Self {
            blacklist: default_blacklist(),
            duration: DEFAULT_DURATION_MS,
            opacity: 0.0,
            easing: EasingType::EaseOut,
            transform: TransformConfig::default(),
        }
    }
}

/// Session and splash screens that must vanish without animation.
fn default_blacklist() -> Vec<String> {
    ["ksmserver ksmserver", "ksplashqml ksplashqml", "ksplashsimple ksplashsimple", "ksplashx ksplashx"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/disappear/config.jsonc, \
         the platform configuration directory, or ~/.disappear.jsonc"
    )]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
    /// A configuration file is already present where a template was requested.
    #[error("Configuration file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Configuration file names in the home directory.
const HOME_CONFIG_FILE_NAMES: &[&str] = &[".disappear.jsonc", ".disappear.json"];

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/disappear/config.jsonc` or `config.json`
/// 2. `~/.config/disappear/config.jsonc` or `config.json`
/// 3. The platform configuration directory (`dirs::config_dir()`)
/// 4. `~/.disappear.jsonc` or `~/.disappear.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut push_dir = |dir: PathBuf| {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME is often ~/.config itself
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    };

    if let Some(xdg_config) = std::env::var("XDG_CONFIG_HOME").ok().filter(|v| !v.is_empty()) {
        push_dir(PathBuf::from(xdg_config).join(APP_NAME));
    }

    if let Some(home) = dirs::home_dir() {
        push_dir(home.join(".config").join(APP_NAME));
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_dir(config_dir.join(APP_NAME));
    }

    if let Some(home) = dirs::home_dir() {
        for filename in HOME_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected locations.
/// Returns `ConfigError::Io` if a configuration file exists but could not be read.
/// Returns `ConfigError::Parse` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(DisappearConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            let config = read_config(&path)?;
            return Ok((config, path));
        }
    }

    Err(ConfigError::NotFound)
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, and the same
/// read and parse errors as [`load_config`].
pub fn load_config_from_path(path: &Path) -> Result<(DisappearConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }
    let config = read_config(path)?;
    Ok((config, path.to_path_buf()))
}

/// Reads and parses a JSONC configuration file.
fn read_config(path: &Path) -> Result<DisappearConfig, ConfigError> {
    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let config: DisappearConfig = serde_json::from_reader(reader)?;
    Ok(config)
}

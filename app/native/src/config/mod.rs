//! Configuration module for Disappear.
//!
//! This module provides configuration types, loading functionality, and file watching
//! for hot-reloading configuration changes.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod template;
pub mod types;
mod watcher;

use std::path::{Path, PathBuf};

pub use types::{
    ConfigError, DisappearConfig, EasingType, TransformConfig, config_paths, load_config,
    load_config_from_path,
};
pub use watcher::watch_config_file;

/// Loads the configuration, falling back to defaults.
///
/// With `custom_path` set only that file is considered; otherwise the default
/// search paths are tried in order. A missing file silently yields the
/// defaults, any other failure is logged first.
///
/// Returns the configuration and the path it was read from, if any.
#[must_use]
pub fn load_or_default(custom_path: Option<&Path>) -> (DisappearConfig, Option<PathBuf>) {
    let result = custom_path.map_or_else(load_config, load_config_from_path);

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            (config, Some(path))
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            (DisappearConfig::default(), None)
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            (DisappearConfig::default(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_or_default_missing_file_uses_defaults() {
        let (config, path) = load_or_default(Some(Path::new("/nonexistent/config.jsonc")));
        assert_eq!(config, DisappearConfig::default());
        assert!(path.is_none());
    }

    #[test]
    fn test_load_or_default_invalid_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2").unwrap();

        let (config, path) = load_or_default(Some(file.path()));
        assert_eq!(config, DisappearConfig::default());
        assert!(path.is_none());
    }

    #[test]
    fn test_load_or_default_reads_custom_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "duration": 300 }}"#).unwrap();

        let (config, path) = load_or_default(Some(file.path()));
        assert_eq!(config.duration, 300);
        assert_eq!(path.as_deref(), Some(file.path()));
    }
}

//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

use super::ConfigError;

/// Generates a configuration template with all options commented out.
///
/// This creates a JSONC file documenting every option together with its
/// default value.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Disappear Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // Window classes that close instantly, without animation.
  // Classes are matched exactly against "resource-name resource-class".
  // "blacklist": [
  //   "ksmserver ksmserver",
  //   "ksplashqml ksplashqml",
  //   "ksplashsimple ksplashsimple",
  //   "ksplashx ksplashx"
  // ],

  // Animation duration in milliseconds (0 or below = 160).
  // The compositor's global animation speed is applied on top.
  // "duration": 160,

  // Window opacity at the end of the animation (0.0 - 1.0).
  // "opacity": 0.0,

  // Easing: "linear", "ease-in", "ease-out", "ease-in-out", "ease-out-expo"
  // "easing": "ease-out",

  // Transform applied while the window disappears.
  //
  // Recede: the window moves away from the viewer and drifts vertically.
  // "transform": {
  //   "kind": "recede",
  //   // Distance travelled away from the viewer, in pixels
  //   "distance": 100,
  //   // Vertical drift at the end of the animation, in pixels
  //   "shift": 20
  // }
  //
  // Shrink: the window scales down towards its bottom edge.
  // "transform": {
  //   "kind": "shrink",
  //   // Final scale factor
  //   "scale": 0.8
  // }
}
"#
    .to_string()
}

/// Writes the configuration template to `path`, creating parent directories.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyExists` if a file is already present at
/// `path`, or `ConfigError::Io` if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisappearConfig;

    #[test]
    fn test_template_parses_to_default_config() {
        let template = generate_config_template();
        let reader = json_comments::StripComments::new(template.as_bytes());
        let config: DisappearConfig = serde_json::from_reader(reader).unwrap();
        assert_eq!(config, DisappearConfig::default());
    }

    #[test]
    fn test_template_documents_all_options() {
        let template = generate_config_template();
        for key in ["blacklist", "duration", "opacity", "easing", "transform", "recede", "shrink"] {
            assert!(template.contains(key), "template is missing {key}");
        }
    }

    #[test]
    fn test_create_config_file_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.jsonc");

        create_config_file(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, generate_config_template());
    }

    #[test]
    fn test_create_config_file_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        fs::write(&path, "{}").unwrap();

        let result = create_config_file(&path);
        assert!(matches!(result, Err(ConfigError::AlreadyExists(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}

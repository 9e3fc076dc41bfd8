//! Shared types for CLI commands.
//!
//! This module contains types that are used across multiple CLI command modules.

use std::str::FromStr;

use crate::host::{Size, WindowType};

/// Window size given as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSize {
    fn default() -> Self { Self { width: 800.0, height: 600.0 } }
}

impl From<WindowSize> for Size {
    fn from(size: WindowSize) -> Self { Self::new(size.width, size.height) }
}

impl FromStr for WindowSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid size '{s}'. Expected WIDTHxHEIGHT, e.g. 800x600.");

        let (width, height) = s.to_lowercase().split_once('x').map_or_else(
            || Err(invalid()),
            |(w, h)| {
                let width = w.trim().parse::<f64>().map_err(|_| invalid())?;
                let height = h.trim().parse::<f64>().map_err(|_| invalid())?;
                Ok((width, height))
            },
        )?;

        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}

impl std::fmt::Display for WindowSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Window type (CLI representation).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CliWindowType {
    /// Regular application window.
    #[default]
    Normal,
    /// Dialog window.
    Dialog,
    /// Desktop background.
    Desktop,
    /// Panel or dock.
    Dock,
    /// Popup or dropdown menu.
    Menu,
    /// Tooltip.
    Tooltip,
    /// Notification popup.
    Notification,
    /// Splash screen.
    Splash,
}

impl From<CliWindowType> for WindowType {
    fn from(value: CliWindowType) -> Self {
        match value {
            CliWindowType::Normal => Self::Normal,
            CliWindowType::Dialog => Self::Dialog,
            CliWindowType::Desktop => Self::Desktop,
            CliWindowType::Dock => Self::Dock,
            CliWindowType::Menu => Self::Menu,
            CliWindowType::Tooltip => Self::Tooltip,
            CliWindowType::Notification => Self::Notification,
            CliWindowType::Splash => Self::Splash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // WindowSize tests
    // ========================================================================

    #[test]
    fn test_window_size_from_str() {
        let size: WindowSize = "1280x720".parse().unwrap();
        assert!((size.width - 1280.0).abs() < f64::EPSILON);
        assert!((size.height - 720.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_window_size_from_str_uppercase_separator() {
        let size: WindowSize = "640X480".parse().unwrap();
        assert!((size.width - 640.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_window_size_zero_is_allowed() {
        let size: WindowSize = "0x0".parse().unwrap();
        assert_eq!(Size::from(size), Size::new(0.0, 0.0));
    }

    #[test]
    fn test_window_size_rejects_garbage() {
        assert!("800".parse::<WindowSize>().is_err());
        assert!("axb".parse::<WindowSize>().is_err());
        assert!("-1x10".parse::<WindowSize>().is_err());
        assert!("infx10".parse::<WindowSize>().is_err());
    }

    #[test]
    fn test_window_size_display() {
        assert_eq!(WindowSize::default().to_string(), "800x600");
    }

    // ========================================================================
    // CliWindowType tests
    // ========================================================================

    #[test]
    fn test_cli_window_type_conversion() {
        assert_eq!(WindowType::from(CliWindowType::Normal), WindowType::Normal);
        assert_eq!(WindowType::from(CliWindowType::Dock), WindowType::Dock);
        assert_eq!(WindowType::from(CliWindowType::Splash), WindowType::Splash);
    }
}

//! Error types for Disappear.
//!
//! This module provides the error type returned by CLI commands. Library
//! operations use narrower errors (such as [`ConfigError`]) that convert
//! into [`DisappearError`] with `?`.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur during command execution.
///
/// Serializes as `{"kind": ..., "message": ...}` so `--json` output can
/// report failures in a structured way.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum DisappearError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ConfigError> for DisappearError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<std::io::Error> for DisappearError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for DisappearError {
    fn from(err: serde_json::Error) -> Self { Self::SerializationError(err.to_string()) }
}

//! Core error types for codeshrine-core.
//!
//! Command-precondition violations (starting without a target, marking an
//! unknown reward as read) are deliberately NOT errors: the controller and
//! inbox treat them as logged no-ops. The types here cover the failures
//! that can actually surface to a caller - configuration I/O and invalid
//! settings values.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for codeshrine-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load the settings file
    #[error("Failed to load settings from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the settings file
    #[error("Failed to save settings to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse the settings file
    #[error("Failed to parse settings: {0}")]
    ParseFailed(String),

    /// No platform config directory available
    #[error("Could not determine a configuration directory for this platform")]
    NoConfigDir,
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

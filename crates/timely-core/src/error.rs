//! Core error types for timely-core.
//!
//! Small thiserror-based hierarchy: one enum per area plus a top-level
//! `CoreError` umbrella used across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for timely-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Plan input errors
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Plan input errors.
///
/// Missing or unparseable numeric fields are not errors -- the form layer
/// substitutes the configured defaults for those. Only a start time that is
/// present but malformed fails fast.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Start time was provided but does not parse as "HH:MM"
    #[error("invalid start time: '{input}' (expected HH:MM, 24-hour)")]
    InvalidStartTime { input: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Unknown or untyped configuration key
    #[error("Unknown configuration key: {0}")]
    InvalidKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

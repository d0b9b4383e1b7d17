//! Core error types for calguard-core.
//!
//! This module defines the error hierarchy using thiserror. Cache failures
//! never appear here: the cache is best-effort and absorbed at the call site.

use thiserror::Error;

/// Top-level error type for the engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration parse errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised at the provider boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was absent on an incoming event record
    #[error("Missing required field '{field}' on event '{event_id}'")]
    MissingField {
        event_id: String,
        field: &'static str,
    },

    /// A timestamp field could not be parsed as ISO-8601
    #[error("Unparseable timestamp '{value}' in field '{field}' on event '{event_id}'")]
    InvalidTimestamp {
        event_id: String,
        field: &'static str,
        value: String,
    },
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

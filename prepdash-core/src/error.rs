//! Error types for prepdash-core

use thiserror::Error;

/// Main error type for the prepdash-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// No document stored for the given owner
    #[error("document not found for owner: {0}")]
    DocumentNotFound(String),
}

/// Result type alias for prepdash-core
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for roundel

use thiserror::Error;

/// Main error type for roundel operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid circle spec: {0}")]
    InvalidSpec(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for roundel operations
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the movie shelf.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the movie shelf.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("OMDb API key not configured. Set OMDB_API_KEY environment variable")]
    ApiKeyMissing,

    // Input validation errors
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Rating cannot be empty")]
    EmptyRating,

    #[error("Rating must be a number: {0}")]
    InvalidRating(String),

    // Metadata lookup errors
    #[error("Movie not found on OMDb: {0}")]
    MovieNotFound(String),

    // Website generation errors
    #[error("Template file not found: {0}")]
    TemplateNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("Could not reach OMDb: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}

//! Error types for the media librarian.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the media librarian.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("source directory not set; pass --source or set MEDIA_LIBRARIAN_SOURCE_PATH")]
    SourcePathNotSet,

    #[error("target directory not set; pass --target or set MEDIA_LIBRARIAN_TARGET_PATH")]
    TargetPathNotSet,

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // Suggestion service errors
    #[error("request to suggestion service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response structure from suggestion service: {0}")]
    ResponseShape(#[source] serde_json::Error),

    #[error("failed to parse suggestions: {0}")]
    AiParse(#[source] serde_json::Error),

    #[error("refusing unsafe suggested path: {0}")]
    UnsafeTargetPath(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

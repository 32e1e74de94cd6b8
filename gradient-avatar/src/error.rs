//! Error types for avatar rendering

use thiserror::Error;

/// Result type alias for avatar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers. Gradient failures never show up here; they
/// are replaced by the fallback gradient.
#[derive(Error, Debug)]
pub enum Error {
    /// The canvas must be at least one pixel wide
    #[error("Invalid avatar size: {0} (must be at least 1)")]
    InvalidSize(u32),

    /// An options object could not be parsed
    #[error("Invalid avatar options: {0}")]
    InvalidOptions(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidOptions(err.to_string())
    }
}

//! Storage error types.

use thiserror::Error;

/// Errors that can occur in a [`crate::CartStorage`] backend.
///
/// The cart store itself never surfaces these to callers; it applies the
/// discard-and-continue policy and logs instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store file is not valid JSON.
    #[error("malformed store file: {0}")]
    MalformedStore(#[from] serde_json::Error),
}

//! Error types for radix-lexicon.

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error type.
///
/// Only bulk ingestion can fail at runtime; every other operation is total.
#[derive(Debug, Error)]
pub enum Error {
    /// The input stream could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

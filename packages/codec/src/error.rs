//! Error handling for the card-detail codec

use thiserror::Error;

/// Codec-specific errors
#[derive(Debug, Error)]
pub enum CodecError {
    /// Decoding produced a field count other than the five positional fields
    #[error("invalid key format: expected {expected} fields, found {actual}")]
    MalformedKey {
        /// Number of fields the key grammar requires
        expected: usize,
        /// Number of whitespace-separated tokens actually decoded
        actual: usize,
    },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

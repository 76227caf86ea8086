//! Wallet error taxonomy.
//!
//! Nothing here is fatal: validation and PIN failures are user-correctable,
//! a malformed key means the key must be re-entered, and everything is
//! reported as a value with a human-readable reason.

use std::time::Duration;

use cardkey_card::CardError;
use cardkey_codec::CodecError;
use thiserror::Error;

/// Wallet-level errors
#[derive(Debug, Error)]
pub enum VaultError {
    /// A card field failed validation; reported per field
    #[error("validation failed: {0}")]
    Validation(#[from] CardError),

    /// Decoding a key produced the wrong field count; the key is unusable
    #[error("{0}")]
    Codec(#[from] CodecError),

    /// A field contains a reserved delimiter symbol or the separator token
    /// and would not survive a round trip
    #[error("{0} contains reserved characters and cannot be encoded")]
    ReservedCharacters(&'static str),

    /// Bank name empty or containing embedded spaces, which the positional
    /// key format cannot carry
    #[error("bank name must be non-empty and contain no spaces")]
    InvalidBankName,

    /// No record stored under the given key
    #[error("no card stored under that key")]
    CardNotFound,

    /// PIN did not match the stored record
    #[error("incorrect pin")]
    IncorrectPin,

    /// PIN gate locked after repeated failures
    #[error("too many failed pin attempts, try again in {0:?}")]
    TooManyAttempts(Duration),

    /// Snapshot import/export failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for wallet operations
pub type VaultResult<T> = std::result::Result<T, VaultError>;

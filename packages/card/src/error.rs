//! Per-field validation errors

use thiserror::Error;

use crate::network::CardNetwork;

/// A single field that failed validation.
///
/// Validation failures are user-correctable and reported per field; they
/// never reach the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Card number failed the Luhn check or its length bounds
    #[error("card number failed validation")]
    InvalidCardNumber,

    /// Cardholder name too short or contains disallowed characters
    #[error("cardholder name must be at least 2 letters, spaces, hyphens or apostrophes")]
    InvalidCardholderName,

    /// Expiry not strict MM/YY or already in the past
    #[error("expiry date must be MM/YY and not in the past")]
    InvalidExpiryDate,

    /// CVV length does not match the detected network
    #[error("cvv must be {} digits for {}", network.cvv_length(), network.display_name())]
    InvalidCvv {
        /// Network the CVV rule was resolved against
        network: CardNetwork,
    },

    /// PIN is not exactly four digits
    #[error("pin must be exactly 4 digits")]
    InvalidPin,
}

/// Result type for card validation
pub type Result<T> = std::result::Result<T, CardError>;

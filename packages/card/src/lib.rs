//! # Cardkey Card
//!
//! Validation and formatting utilities that gate what may enter the codec:
//! Luhn checking, payment-network detection by BIN prefix, CVV/PIN/expiry
//! rules, and display helpers.
//!
//! Every check is a pure synchronous function; malformed input fails the
//! check rather than erroring.

pub mod error;
pub mod format;
pub mod network;
pub mod validate;

pub use error::{CardError, Result};
pub use format::{format_card_number, format_expiry_input, mask_card_number};
pub use network::CardNetwork;
pub use validate::{
    is_card_expired, is_card_expired_on, months_until_expiry, months_until_expiry_on,
    validate_card, validate_card_number, validate_cardholder_name, validate_cvv,
    validate_expiry_date, validate_expiry_date_on, validate_pin,
};

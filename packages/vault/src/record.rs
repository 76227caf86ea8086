//! The persisted card record.

use serde::{Deserialize, Serialize};

/// One stored card, the shape persisted per key.
///
/// Only the last four PAN digits are kept in clear; the full PAN, cardholder
/// name, expiry, and CVV are recoverable solely by decoding
/// `encryption_key`. The PIN is a local access gate stored alongside the
/// record and is independent of the codec: losing it does not prevent
/// decoding the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Last four digits of the PAN, for display
    pub card_number: String,
    /// Issuing bank name
    pub bank_name: String,
    /// Four-digit access PIN, gating reveal/remove only
    pub card_pin: String,
    /// The codec output; doubles as the record's identity in the store.
    /// Immutable once created: edits never re-run the codec.
    pub encryption_key: String,
}

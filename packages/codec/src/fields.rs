//! The five-field card record and its positional text serialization.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::entropy::EntropySource;
use crate::error::{CodecError, Result};
use crate::word::{self, FIELD_SEPARATOR};

/// Number of positional fields carried by a key.
const FIELD_COUNT: usize = 5;

/// The full card details as entered by the cardholder.
///
/// This is the only place the full PAN, cardholder name, and CVV exist in
/// clear; it zeroizes on drop and is never persisted directly.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct CardDetails {
    /// Issuing bank name. Must not contain embedded spaces: the decode side
    /// splits positionally and has no escaping for them.
    pub bank_name: String,
    /// Full PAN; reduced to its digits before serialization.
    pub card_number: String,
    /// Cardholder name; inter-word spaces travel as `?` through the codec.
    pub cardholder_name: String,
    /// Expiry in `MM/YY` form.
    pub expiry_date: String,
    /// Card verification value.
    pub cvv: String,
}

impl CardDetails {
    /// Joins the five fields into the separator-delimited text the codec
    /// encodes: spaces in the cardholder name become `?`, and the PAN is
    /// reduced to its digits.
    ///
    /// Digits-only matters: grouping punctuation like `-` is a delimiter
    /// symbol, and letting it into the key would split the PAN chunk apart
    /// on decode.
    pub fn to_field_text(&self) -> String {
        let pan: String = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let name: String = self
            .cardholder_name
            .chars()
            .map(|c| if c.is_whitespace() { '?' } else { c })
            .collect();

        [
            self.bank_name.as_str(),
            pan.as_str(),
            name.as_str(),
            self.expiry_date.as_str(),
            self.cvv.as_str(),
        ]
        .join(FIELD_SEPARATOR)
    }

    /// Splits decoded field text back into the five positional fields.
    ///
    /// Spaces in the cardholder name are restored from the `/`/`?`
    /// convention. Any token count other than five means the key was not
    /// produced by this codec (or a field violated the reserved-text
    /// precondition) and is reported as a malformed key.
    pub fn from_field_text(decoded: &str) -> Result<Self> {
        let parts: Vec<&str> = decoded.split_whitespace().collect();
        if parts.len() != FIELD_COUNT {
            return Err(CodecError::MalformedKey {
                expected: FIELD_COUNT,
                actual: parts.len(),
            });
        }

        let cardholder_name = parts[2].replace(['/', '?'], " ").trim().to_string();

        Ok(Self {
            bank_name: parts[0].to_string(),
            card_number: parts[1].to_string(),
            cardholder_name,
            expiry_date: parts[3].to_string(),
            cvv: parts[4].to_string(),
        })
    }

    /// Encodes the record into an opaque key using the given entropy source.
    pub fn encode_with<E: EntropySource>(&self, entropy: &mut E) -> String {
        word::encode_with(&self.to_field_text(), entropy)
    }

    /// Encodes the record into an opaque key.
    pub fn encode(&self) -> String {
        word::encode(&self.to_field_text())
    }

    /// Reconstructs the record from a key.
    ///
    /// Field text comes back lowercased; that is a property of the codec,
    /// not a loss of information the caller can recover.
    pub fn decode(key: &str) -> Result<Self> {
        Self::from_field_text(&word::decode(key))
    }

    /// Last four digits of the PAN, the only part of it a stored record keeps.
    pub fn last_four(&self) -> String {
        let pan: String = self
            .card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let cut = pan.len().saturating_sub(4);
        pan[cut..].to_string()
    }
}

// PAN and CVV stay out of debug output.
impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("bank_name", &self.bank_name)
            .field("card_number", &format_args!("****{}", self.last_four()))
            .field("cardholder_name", &self.cardholder_name)
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"***")
            .finish()
    }
}

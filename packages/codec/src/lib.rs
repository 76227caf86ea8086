//! # Cardkey Codec
//!
//! Reversible text obfuscation for payment-card details: five fields in, one
//! printable key out, and back again.
//!
//! This is deliberately *not* a cipher. It offers no confidentiality against
//! anyone who knows the algorithm, no integrity, and no key derivation. The
//! contract is exact behavioral reproduction: every key ever issued must keep
//! decoding, so the arithmetic here is frozen.
//!
//! Letters are case-folded by the transform, so a round trip returns the
//! lowercase form of the input. Field text must not contain any of the
//! reserved [`DELIMITERS`] or the [`FIELD_SEPARATOR`] token; that is a caller
//! precondition, checked with [`contains_reserved_text`] at validation time,
//! never at encode time.

pub mod alpha;
pub mod digit;
pub mod entropy;
pub mod error;
pub mod fields;
pub mod symbol;
pub mod word;

pub use entropy::{EntropySource, PinnedEntropy, ThreadEntropy};
pub use error::{CodecError, Result};
pub use fields::CardDetails;
pub use symbol::DELIMITERS;
pub use word::{FIELD_SEPARATOR, SHIFT_AMOUNT, contains_reserved_text, decode, encode, encode_with};

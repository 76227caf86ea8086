//! # Cardkey Vault
//!
//! In-memory wallet for card records. Each record is stored under the
//! opaque key produced by [`cardkey_codec`]; the key alone reconstructs the
//! full card, the stored record keeps only the last four PAN digits, the
//! bank name, and the access PIN.
//!
//! The PIN gates reveal and removal of stored records and locks after
//! repeated failures; it is independent of the codec. Remote persistence
//! and caching are external collaborators fed through
//! [`Wallet::snapshot`]/[`Wallet::restore`].

pub mod attempts;
pub mod config;
pub mod error;
mod logging;
pub mod record;
pub mod wallet;

pub use attempts::PinGate;
pub use config::WalletConfig;
pub use error::{VaultError, VaultResult};
pub use record::CardRecord;
pub use wallet::{Wallet, generate_card};

// Downstream callers build details and tune entropy without naming the
// codec crate directly.
pub use cardkey_codec::{CardDetails, EntropySource, PinnedEntropy, ThreadEntropy};

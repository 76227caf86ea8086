//! The in-memory wallet: card records keyed by their encoded key.
//!
//! The wallet is the causal seam the codec sits behind: validation runs
//! before encode, encode runs before the key reaches any persistence
//! collaborator. Persistence itself is out of scope; [`Wallet::snapshot`]
//! and [`Wallet::restore`] exchange the whole map with whatever store the
//! caller uses (whole-document replace, last writer wins).

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use cardkey_card::validate_card;
use cardkey_codec::{CardDetails, EntropySource, ThreadEntropy, contains_reserved_text};
use dashmap::DashMap;

use crate::attempts::PinGate;
use crate::config::WalletConfig;
use crate::error::{VaultError, VaultResult};
use crate::logging::security_event;
use crate::record::CardRecord;

/// Reconstructs card details from a key alone.
///
/// No record or PIN is required: anyone holding a key can decode it. The
/// PIN gates access to *stored* records, not to the codec.
pub fn generate_card(key: &str) -> VaultResult<CardDetails> {
    Ok(CardDetails::decode(key)?)
}

/// Card store keyed by encryption key, with a wallet-global PIN gate.
#[derive(Debug)]
pub struct Wallet {
    config: WalletConfig,
    cards: DashMap<String, CardRecord>,
    gate: Mutex<PinGate>,
}

impl Wallet {
    /// Empty wallet with default configuration.
    pub fn new() -> Self {
        Self::with_config(WalletConfig::default())
    }

    /// Empty wallet with explicit configuration.
    pub fn with_config(config: WalletConfig) -> Self {
        let gate = Mutex::new(PinGate::new(&config));
        Self {
            config,
            cards: DashMap::new(),
            gate,
        }
    }

    /// The configuration this wallet was built with.
    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Validates and stores a card, returning its key.
    ///
    /// Runs every field check, rejects text the codec cannot round-trip,
    /// encodes the five fields, and stores the record under the key. Only
    /// the last four PAN digits land in the record.
    pub fn add_card(&self, details: &CardDetails, pin: &str) -> VaultResult<String> {
        self.add_card_with(details, pin, &mut ThreadEntropy)
    }

    /// [`add_card`](Self::add_card) with an explicit entropy source, for
    /// callers that need reproducible keys.
    pub fn add_card_with<E: EntropySource>(
        &self,
        details: &CardDetails,
        pin: &str,
        entropy: &mut E,
    ) -> VaultResult<String> {
        validate_card(
            &details.card_number,
            &details.cardholder_name,
            &details.expiry_date,
            &details.cvv,
            pin,
        )?;

        // The positional key format has no escaping for spaces in the bank
        // name, so they are rejected here rather than silently misparsed on
        // decode.
        if details.bank_name.is_empty() || details.bank_name.chars().any(char::is_whitespace) {
            return Err(VaultError::InvalidBankName);
        }

        // Delimiter-collision precondition: reserved text never reaches the
        // codec. This also rejects names with hyphens or apostrophes even
        // though the character class allows them; both are delimiters.
        for (field, value) in [
            ("bank name", details.bank_name.as_str()),
            ("cardholder name", details.cardholder_name.as_str()),
        ] {
            if contains_reserved_text(value) {
                return Err(VaultError::ReservedCharacters(field));
            }
        }

        let key = details.encode_with(entropy);
        let record = CardRecord {
            card_number: details.last_four(),
            bank_name: details.bank_name.clone(),
            card_pin: pin.to_string(),
            encryption_key: key.clone(),
        };

        self.cards.insert(key.clone(), record);
        security_event("CARD_ADDED", &details.last_four(), true);
        Ok(key)
    }

    /// PIN-gated reconstruction of a stored card's full details.
    pub fn reveal(&self, key: &str, pin: &str) -> VaultResult<CardDetails> {
        let record = self
            .cards
            .get(key)
            .map(|r| r.value().clone())
            .ok_or(VaultError::CardNotFound)?;
        self.verify_pin(&record, pin)?;

        let details = CardDetails::decode(key)?;
        security_event("CARD_REVEALED", &record.card_number, true);
        Ok(details)
    }

    /// PIN-gated removal; returns the removed record.
    pub fn remove(&self, key: &str, pin: &str) -> VaultResult<CardRecord> {
        let record = self
            .cards
            .get(key)
            .map(|r| r.value().clone())
            .ok_or(VaultError::CardNotFound)?;
        self.verify_pin(&record, pin)?;

        // Re-check the PIN under the map lock: a concurrent replace between
        // the lookup and here may have swapped the record, and only the
        // record that matched the PIN may be removed.
        match self.cards.remove_if(key, |_, r| r.card_pin == pin) {
            Some((_, removed)) => {
                security_event("CARD_REMOVED", &removed.card_number, true);
                Ok(removed)
            }
            None if self.cards.contains_key(key) => Err(VaultError::IncorrectPin),
            None => Err(VaultError::CardNotFound),
        }
    }

    /// Replaces a record wholesale under its existing key.
    ///
    /// The codec is never re-run on update: the key stays whatever it was
    /// at creation and will not reflect this edit.
    pub fn replace(&self, key: &str, mut record: CardRecord) -> VaultResult<()> {
        if !self.cards.contains_key(key) {
            return Err(VaultError::CardNotFound);
        }
        record.encryption_key = key.to_string();
        self.cards.insert(key.to_string(), record);
        Ok(())
    }

    /// The stored record for a key, if any.
    pub fn get(&self, key: &str) -> Option<CardRecord> {
        self.cards.get(key).map(|r| r.value().clone())
    }

    /// All stored records, in no particular order.
    pub fn records(&self) -> Vec<CardRecord> {
        self.cards.iter().map(|r| r.value().clone()).collect()
    }

    /// Number of stored cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards are stored.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The whole store, for handing to a persistence collaborator.
    pub fn snapshot(&self) -> HashMap<String, CardRecord> {
        self.cards
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect()
    }

    /// Replaces the whole store with a previously persisted map.
    pub fn restore(&self, cards: HashMap<String, CardRecord>) {
        self.cards.clear();
        for (key, record) in cards {
            self.cards.insert(key, record);
        }
    }

    /// Snapshot serialized as JSON.
    pub fn export_json(&self) -> VaultResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Restores the store from [`export_json`](Self::export_json) output.
    pub fn import_json(&self, json: &str) -> VaultResult<()> {
        let cards: HashMap<String, CardRecord> = serde_json::from_str(json)?;
        self.restore(cards);
        Ok(())
    }

    fn verify_pin(&self, record: &CardRecord, pin: &str) -> VaultResult<()> {
        let mut gate = self.gate();
        gate.ensure_open()?;

        if record.card_pin != pin {
            gate.record_failure();
            security_event("PIN_CHECK", &record.card_number, false);
            return Err(VaultError::IncorrectPin);
        }

        gate.reset();
        Ok(())
    }

    fn gate(&self) -> MutexGuard<'_, PinGate> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

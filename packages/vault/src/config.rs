//! Wallet configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the wallet's PIN gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Consecutive PIN failures before the gate locks
    #[serde(default = "default_max_pin_attempts")]
    pub max_pin_attempts: u32,
    /// Lockout duration in seconds once the gate locks
    #[serde(default = "default_pin_lockout_secs")]
    pub pin_lockout_secs: u64,
}

impl WalletConfig {
    /// Lockout duration as a [`Duration`].
    pub fn pin_lockout(&self) -> Duration {
        Duration::from_secs(self.pin_lockout_secs)
    }
}

fn default_max_pin_attempts() -> u32 {
    3
}

fn default_pin_lockout_secs() -> u64 {
    30
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            max_pin_attempts: default_max_pin_attempts(),
            pin_lockout_secs: default_pin_lockout_secs(),
        }
    }
}

//! PIN attempt tracking with lockout.
//!
//! Wallet-global: repeated failures against any record feed the same
//! counter. The lock auto-expires; a successful PIN resets everything.

use std::time::{Duration, Instant};

use crate::config::WalletConfig;
use crate::error::{VaultError, VaultResult};

/// Failure counter and lock state for the PIN gate.
#[derive(Debug)]
pub struct PinGate {
    max_attempts: u32,
    lockout: Duration,
    count: u32,
    locked_until: Option<Instant>,
}

impl PinGate {
    /// Builds a gate from the wallet configuration.
    pub fn new(config: &WalletConfig) -> Self {
        Self {
            max_attempts: config.max_pin_attempts,
            lockout: config.pin_lockout(),
            count: 0,
            locked_until: None,
        }
    }

    /// Fails with the remaining lock time if the gate is currently locked.
    /// An expired lock resets the counter and passes.
    pub fn ensure_open(&mut self) -> VaultResult<()> {
        self.ensure_open_at(Instant::now())
    }

    pub(crate) fn ensure_open_at(&mut self, now: Instant) -> VaultResult<()> {
        match self.locked_until {
            Some(until) if now < until => Err(VaultError::TooManyAttempts(until - now)),
            Some(_) => {
                self.reset();
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Records a failed attempt, locking once the limit is reached.
    pub fn record_failure(&mut self) {
        self.record_failure_at(Instant::now());
    }

    pub(crate) fn record_failure_at(&mut self, now: Instant) {
        self.count += 1;
        if self.count >= self.max_attempts {
            self.locked_until = Some(now + self.lockout);
        }
    }

    /// Clears the counter and any lock after a successful PIN.
    pub fn reset(&mut self) {
        self.count = 0;
        self.locked_until = None;
    }

    /// Number of consecutive failures recorded so far.
    pub fn failures(&self) -> u32 {
        self.count
    }
}

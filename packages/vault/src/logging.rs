//! Security-event logging for wallet operations.

use tracing::{info, warn};

/// Logs a security-relevant wallet event with standardized fields.
///
/// Key material and PINs must never be passed in `details`; callers log the
/// last-four or nothing.
pub(crate) fn security_event(event: &str, details: &str, success: bool) {
    if success {
        info!(event, details, "wallet security event");
    } else {
        warn!(event, details, "wallet security event failed");
    }
}

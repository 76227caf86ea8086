//! Payment-network classification by BIN prefix.

use serde::{Deserialize, Serialize};

/// Payment network a PAN belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    /// Visa (prefix 4)
    Visa,
    /// Mastercard (51–55 and the 2221–2720 issuer ranges)
    Mastercard,
    /// American Express (34, 37)
    Amex,
    /// Discover (6)
    Discover,
    /// RuPay (60, 65, 81, 82, 508)
    Rupay,
    /// Diners Club (30, 36, 38)
    Diners,
    /// JCB (35)
    Jcb,
    /// No rule matched
    Unknown,
}

impl CardNetwork {
    /// Classifies a card number by its leading digits.
    ///
    /// Punctuation and spacing are stripped first; rules are tried in a
    /// fixed priority order and the first match wins, so 60/65 classify as
    /// Discover even though RuPay lists them too. Total: every input maps
    /// to exactly one network, `Unknown` included.
    pub fn detect(card_number: &str) -> Self {
        let digits: String = card_number.chars().filter(char::is_ascii_digit).collect();

        if digits.starts_with('4') {
            return Self::Visa;
        }
        if Self::is_mastercard(&digits) {
            return Self::Mastercard;
        }
        if digits.starts_with("34") || digits.starts_with("37") {
            return Self::Amex;
        }
        if digits.starts_with('6') {
            return Self::Discover;
        }
        if ["60", "65", "81", "82", "508"]
            .iter()
            .any(|p| digits.starts_with(p))
        {
            return Self::Rupay;
        }
        if ["30", "36", "38"].iter().any(|p| digits.starts_with(p)) {
            return Self::Diners;
        }
        if digits.starts_with("35") {
            return Self::Jcb;
        }

        Self::Unknown
    }

    fn is_mastercard(digits: &str) -> bool {
        if digits.starts_with('5') {
            return matches!(digits.as_bytes().get(1), Some(&(b'1'..=b'5')));
        }
        // 2-series issuer ranges: first four digits in 2221–2720.
        if digits.len() >= 4 {
            if let Ok(prefix) = digits[..4].parse::<u32>() {
                return (2221..=2720).contains(&prefix);
            }
        }
        false
    }

    /// Human-readable network name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Rupay => "RuPay",
            Self::Diners => "Diners Club",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }

    /// CVV length the network issues: 4 for American Express, 3 otherwise.
    pub fn cvv_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_prefix() {
        assert_eq!(CardNetwork::detect("4532015112830366"), CardNetwork::Visa);
        assert_eq!(CardNetwork::detect("5105105105105100"), CardNetwork::Mastercard);
        assert_eq!(CardNetwork::detect("2221000000000009"), CardNetwork::Mastercard);
        assert_eq!(CardNetwork::detect("2720990000000007"), CardNetwork::Mastercard);
        assert_eq!(CardNetwork::detect("378282246310005"), CardNetwork::Amex);
        assert_eq!(CardNetwork::detect("353011133330000"), CardNetwork::Jcb);
        assert_eq!(CardNetwork::detect("30569309025904"), CardNetwork::Diners);
        assert_eq!(CardNetwork::detect("8112345678901234"), CardNetwork::Rupay);
        assert_eq!(CardNetwork::detect("5081234567890123"), CardNetwork::Rupay);
    }

    #[test]
    fn priority_order_decides_overlaps() {
        // 60/65 are listed for RuPay but Discover's broader rule wins first.
        assert_eq!(CardNetwork::detect("6011111111111117"), CardNetwork::Discover);
        assert_eq!(CardNetwork::detect("6521111111111117"), CardNetwork::Discover);
        // 34/37 hit Amex before Diners' 3-series rules are consulted.
        assert_eq!(CardNetwork::detect("341111111111111"), CardNetwork::Amex);
    }

    #[test]
    fn unmatched_prefixes_are_unknown() {
        assert_eq!(CardNetwork::detect("1234567890123"), CardNetwork::Unknown);
        assert_eq!(CardNetwork::detect("9999999999999"), CardNetwork::Unknown);
        assert_eq!(CardNetwork::detect(""), CardNetwork::Unknown);
        // 56 is outside Mastercard's 51–55 band and matches nothing else.
        assert_eq!(CardNetwork::detect("5612345678901234"), CardNetwork::Unknown);
        // 2-series outside 2221–2720.
        assert_eq!(CardNetwork::detect("2220999999999999"), CardNetwork::Unknown);
        assert_eq!(CardNetwork::detect("2721000000000000"), CardNetwork::Unknown);
    }

    #[test]
    fn formatting_noise_is_stripped() {
        assert_eq!(CardNetwork::detect("4532 0151 1283 0366"), CardNetwork::Visa);
        assert_eq!(CardNetwork::detect("3782-822463-10005"), CardNetwork::Amex);
    }

    #[test]
    fn serde_names_are_lowercase() {
        let json = serde_json::to_string(&CardNetwork::Amex).unwrap();
        assert_eq!(json, "\"amex\"");
    }
}

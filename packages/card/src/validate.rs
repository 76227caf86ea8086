//! Input validation for card fields.
//!
//! Every check takes a string (plus a network tag for CVV) and answers with
//! a plain `bool`; malformed input fails the check, it never panics or
//! errors. [`validate_card`] aggregates the checks and reports the first
//! failing field.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CardError;
use crate::network::CardNetwork;

/// Strict `MM/YY` with month 01–12.
static EXPIRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").unwrap_or_else(|e| panic!("expiry regex: {e}"))
});

/// Letters, spaces, hyphens, apostrophes; length enforced separately.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z\s\-']+$").unwrap_or_else(|e| panic!("name regex: {e}"))
});

fn digits_of(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Luhn checksum over the digits of `card_number`.
///
/// Non-digits are stripped first; the digit count must be 13–19. Walking
/// from the rightmost digit, every second digit is doubled (9 subtracted
/// when the double exceeds 9) and the total must divide by 10.
pub fn validate_card_number(card_number: &str) -> bool {
    let digits = digits_of(card_number);
    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }

    let mut sum = 0u32;
    for (i, c) in digits.bytes().rev().enumerate() {
        let mut digit = u32::from(c - b'0');
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    sum % 10 == 0
}

/// Expiry check against the current month (UTC).
pub fn validate_expiry_date(expiry: &str) -> bool {
    validate_expiry_date_on(expiry, Utc::now().date_naive())
}

/// Expiry check against an explicit date, for deterministic callers.
///
/// `MM/YY` builds a first-of-month date in `2000 + YY`; valid iff that date
/// is not before the first day of `today`'s month.
pub fn validate_expiry_date_on(expiry: &str, today: NaiveDate) -> bool {
    match (expiry_month_start(expiry), current_month_start(today)) {
        (Some(expiry_date), Some(month_start)) => expiry_date >= month_start,
        _ => false,
    }
}

/// True if the card is expired (or the expiry is malformed).
pub fn is_card_expired(expiry: &str) -> bool {
    is_card_expired_on(expiry, Utc::now().date_naive())
}

/// [`is_card_expired`] against an explicit date.
pub fn is_card_expired_on(expiry: &str, today: NaiveDate) -> bool {
    !validate_expiry_date_on(expiry, today)
}

/// Whole months from `today`'s month to the expiry month.
///
/// `None` for a malformed expiry; a card expiring this month or already
/// expired reports zero.
pub fn months_until_expiry(expiry: &str) -> Option<u32> {
    months_until_expiry_on(expiry, Utc::now().date_naive())
}

/// [`months_until_expiry`] against an explicit date.
pub fn months_until_expiry_on(expiry: &str, today: NaiveDate) -> Option<u32> {
    let expiry_date = expiry_month_start(expiry)?;
    let months = (expiry_date.year() - today.year()) * 12 + expiry_date.month() as i32
        - today.month() as i32;
    Some(months.max(0) as u32)
}

// First day of the expiry month, or None when the text is not strict MM/YY.
fn expiry_month_start(expiry: &str) -> Option<NaiveDate> {
    let caps = EXPIRY_RE.captures(expiry)?;
    // Both captures are guaranteed numeric by the pattern.
    let month: u32 = caps[1].parse().unwrap_or(0);
    let year: i32 = caps[2].parse().unwrap_or(0);
    NaiveDate::from_ymd_opt(2000 + year, month, 1)
}

fn current_month_start(today: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
}

/// CVV length check: 4 digits for American Express, 3 for every other
/// network. Non-digits are stripped before counting.
pub fn validate_cvv(cvv: &str, network: CardNetwork) -> bool {
    digits_of(cvv).len() == network.cvv_length()
}

/// Cardholder name: trimmed length at least 2, restricted to letters,
/// spaces, hyphens, and apostrophes.
pub fn validate_cardholder_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.len() >= 2 && NAME_RE.is_match(trimmed)
}

/// PIN: exactly 4 digits once non-digits are stripped.
pub fn validate_pin(pin: &str) -> bool {
    digits_of(pin).len() == 4
}

/// Runs every field check and reports the first failure.
///
/// The CVV rule is resolved against the network detected from the card
/// number itself.
pub fn validate_card(
    card_number: &str,
    cardholder_name: &str,
    expiry: &str,
    cvv: &str,
    pin: &str,
) -> Result<(), CardError> {
    if !validate_card_number(card_number) {
        return Err(CardError::InvalidCardNumber);
    }
    if !validate_cardholder_name(cardholder_name) {
        return Err(CardError::InvalidCardholderName);
    }
    if !validate_expiry_date(expiry) {
        return Err(CardError::InvalidExpiryDate);
    }
    let network = CardNetwork::detect(card_number);
    if !validate_cvv(cvv, network) {
        return Err(CardError::InvalidCvv { network });
    }
    if !validate_pin(pin) {
        return Err(CardError::InvalidPin);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn luhn_accepts_valid_pan() {
        assert!(validate_card_number("4532015112830366"));
        assert!(validate_card_number("4532 0151 1283 0366"));
    }

    #[test]
    fn luhn_rejects_single_digit_change() {
        assert!(!validate_card_number("4532015112830367"));
    }

    #[test]
    fn luhn_rejects_out_of_range_lengths() {
        assert!(!validate_card_number("453201511283"));
        assert!(!validate_card_number("45320151128303660000"));
        assert!(!validate_card_number(""));
    }

    #[test]
    fn expiry_accepts_current_month_and_later() {
        let today = date(2026, 8, 30);
        assert!(validate_expiry_date_on("08/26", today));
        assert!(validate_expiry_date_on("09/26", today));
        assert!(validate_expiry_date_on("01/30", today));
    }

    #[test]
    fn expiry_rejects_past_and_malformed() {
        let today = date(2026, 8, 30);
        assert!(!validate_expiry_date_on("07/26", today));
        assert!(!validate_expiry_date_on("01/20", today));
        assert!(!validate_expiry_date_on("13/25", today));
        assert!(!validate_expiry_date_on("00/30", today));
        assert!(!validate_expiry_date_on("1/30", today));
        assert!(!validate_expiry_date_on("01-30", today));
        assert!(!validate_expiry_date_on("", today));
    }

    #[test]
    fn expired_mirrors_validity() {
        let today = date(2026, 8, 30);
        assert!(!is_card_expired_on("08/26", today));
        assert!(!is_card_expired_on("01/30", today));
        assert!(is_card_expired_on("07/26", today));
        assert!(is_card_expired_on("13/25", today));
        assert!(is_card_expired_on("", today));
    }

    #[test]
    fn months_until_expiry_counts_calendar_months() {
        let today = date(2026, 8, 30);
        assert_eq!(months_until_expiry_on("08/26", today), Some(0));
        assert_eq!(months_until_expiry_on("09/26", today), Some(1));
        assert_eq!(months_until_expiry_on("01/27", today), Some(5));
        assert_eq!(months_until_expiry_on("08/28", today), Some(24));
        // Already expired clamps to zero rather than going negative.
        assert_eq!(months_until_expiry_on("01/20", today), Some(0));
        assert_eq!(months_until_expiry_on("13/25", today), None);
        assert_eq!(months_until_expiry_on("1/30", today), None);
    }

    #[test]
    fn cvv_length_follows_network() {
        assert!(validate_cvv("1234", CardNetwork::Amex));
        assert!(!validate_cvv("123", CardNetwork::Amex));
        assert!(validate_cvv("123", CardNetwork::Visa));
        assert!(!validate_cvv("1234", CardNetwork::Visa));
        assert!(!validate_cvv("", CardNetwork::Visa));
    }

    #[test]
    fn pin_is_exactly_four_digits() {
        assert!(validate_pin("1234"));
        assert!(!validate_pin("123"));
        assert!(!validate_pin("12345"));
        // Stripping the letter leaves three digits.
        assert!(!validate_pin("12a4"));
    }

    #[test]
    fn name_allows_letters_spaces_hyphens_apostrophes() {
        assert!(validate_cardholder_name("Priya Sharma"));
        assert!(validate_cardholder_name("O'Brien"));
        assert!(validate_cardholder_name("Jean-Luc"));
        assert!(validate_cardholder_name("  Al  "));
        assert!(!validate_cardholder_name("A"));
        assert!(!validate_cardholder_name("R2D2"));
        assert!(!validate_cardholder_name(""));
    }

    #[test]
    fn validate_card_reports_first_failing_field() {
        let err = validate_card("4532015112830367", "Priya", "12/99", "123", "1234");
        assert!(matches!(err, Err(CardError::InvalidCardNumber)));

        let err = validate_card("4532015112830366", "Priya", "12/99", "1234", "1234");
        assert!(matches!(
            err,
            Err(CardError::InvalidCvv {
                network: CardNetwork::Visa
            })
        ));

        assert!(validate_card("4532015112830366", "Priya", "12/99", "123", "1234").is_ok());
    }
}

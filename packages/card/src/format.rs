//! Display formatting helpers for card numbers and expiry dates.

use rand::Rng;

/// Groups the digits of a card number in fours, separated by spaces.
pub fn format_card_number(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(char::is_ascii_digit).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

/// Masks a card number for display, keeping the last `show_last` digits.
///
/// Inputs with fewer digits than `show_last` render as a fully masked
/// 16-digit placeholder rather than leaking what little there is.
pub fn mask_card_number(card_number: &str, show_last: usize) -> String {
    let digits: String = card_number.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < show_last {
        return format_card_number_like(&"•".repeat(16));
    }
    let masked = "•".repeat(digits.len() - show_last) + &digits[digits.len() - show_last..];
    format_card_number_like(&masked)
}

// Same grouping as `format_card_number` but over an already-masked string.
fn format_card_number_like(masked: &str) -> String {
    let chars: Vec<char> = masked.chars().collect();
    let mut out = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

/// Formats expiry input as the user types: digits only, `MM/YY` shape.
pub fn format_expiry_input(text: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 2 {
        let tail = &digits[2..digits.len().min(4)];
        format!("{}/{}", &digits[..2], tail)
    } else {
        digits
    }
}

/// Generates a Luhn-valid test PAN with the given prefix and total length.
///
/// Development and test helper only; the output is random apart from the
/// prefix and the trailing check digit.
pub fn generate_test_card_number<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    let mut number: String = prefix.chars().filter(char::is_ascii_digit).collect();
    while number.len() + 1 < length {
        let d = rng.random_range(0..10u32);
        number.push(char::from_digit(d, 10).unwrap_or('0'));
    }

    // Check digit: the double-every-second walk as if the digit were present.
    let mut sum = 0u32;
    for (i, c) in number.bytes().rev().enumerate() {
        let mut digit = u32::from(c - b'0');
        if i % 2 == 0 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    let check = (10 - (sum % 10)) % 10;
    number.push(char::from_digit(check, 10).unwrap_or('0'));
    number
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_card_number;

    #[test]
    fn groups_digits_in_fours() {
        assert_eq!(format_card_number("4532015112830366"), "4532 0151 1283 0366");
        assert_eq!(format_card_number("378282246310005"), "3782 8224 6310 005");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn masking_keeps_last_four() {
        assert_eq!(
            mask_card_number("4532015112830366", 4),
            "•••• •••• •••• 0366"
        );
    }

    #[test]
    fn masking_short_input_shows_nothing() {
        assert_eq!(mask_card_number("12", 4), "•••• •••• •••• ••••");
    }

    #[test]
    fn expiry_input_formats_as_typed() {
        assert_eq!(format_expiry_input("1"), "1");
        assert_eq!(format_expiry_input("12"), "12/");
        assert_eq!(format_expiry_input("122"), "12/2");
        assert_eq!(format_expiry_input("1226"), "12/26");
        assert_eq!(format_expiry_input("12/26"), "12/26");
        assert_eq!(format_expiry_input("12268"), "12/26");
    }

    #[test]
    fn generated_test_pans_pass_luhn() {
        let mut rng = rand::rng();
        for prefix in ["4", "51", "34", "6"] {
            let pan = generate_test_card_number(prefix, 16, &mut rng);
            assert_eq!(pan.len(), 16);
            assert!(pan.starts_with(prefix));
            assert!(validate_card_number(&pan), "not Luhn-valid: {pan}");
        }
    }
}

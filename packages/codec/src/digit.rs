//! Reversible substitution on decimal digits via modular multiplication.
//!
//! Encode multiplies by 7 mod 10, decode by 3 mod 10; `7 * 3 ≡ 1 (mod 10)`,
//! so the two maps are exact inverses on every digit.

/// Encodes a single decimal digit. Non-digits are returned unchanged.
pub fn encode_digit(c: char) -> char {
    match c.to_digit(10) {
        Some(d) => char::from_digit((d * 7) % 10, 10).unwrap_or(c),
        None => c,
    }
}

/// Decodes a single decimal digit. Non-digits are returned unchanged.
pub fn decode_digit(c: char) -> char {
    match c.to_digit(10) {
        Some(d) => char::from_digit((d * 3) % 10, 10).unwrap_or(c),
        None => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_digit_round_trips() {
        for d in '0'..='9' {
            assert_eq!(decode_digit(encode_digit(d)), d);
        }
    }

    #[test]
    fn known_vector() {
        let encoded: String = "1234".chars().map(encode_digit).collect();
        assert_eq!(encoded, "7418");

        let decoded: String = "7418".chars().map(decode_digit).collect();
        assert_eq!(decoded, "1234");
    }

    #[test]
    fn non_digits_pass_through() {
        assert_eq!(encode_digit('a'), 'a');
        assert_eq!(decode_digit('/'), '/');
    }
}

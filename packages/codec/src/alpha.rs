//! Shifting substitution on alphabetic characters with an alternating shift
//! sign and an optional encode-only case perturbation.

/// Numeric distance between the upper- and lower-case halves of ASCII.
const CASE_OFFSET: i32 = 32;

/// Running shift state for one encode or decode pass over a single chunk.
///
/// The sign of the shift is inverted before every alphabetic character and
/// only before alphabetic characters, so it alternates strictly across the
/// letters of the chunk no matter what sits between them. Decoding replays
/// the same interleaving with the seed negated, which makes the two passes
/// cancel letter by letter.
///
/// State is scoped to a single pass: construct a fresh value per chunk.
#[derive(Debug)]
pub struct AlphaShift {
    shift: i32,
}

impl AlphaShift {
    /// Seeds the pass with the caller's shift amount (`+3` encode, `-3` decode).
    pub fn new(shift: i32) -> Self {
        Self { shift }
    }

    /// Transforms one alphabetic character and advances the alternating sign.
    ///
    /// The input is normalized to lowercase before the shift, so case never
    /// survives a pass; `uppercase` re-introduces it on encode as pure noise.
    /// Callers must only pass ASCII-alphabetic characters.
    pub fn apply(&mut self, c: char, uppercase: bool) -> char {
        self.shift = -self.shift;

        let pos = c.to_ascii_lowercase() as i32 - 'a' as i32;
        let shifted = (pos + self.shift).rem_euclid(26);
        let mut code = shifted + 'a' as i32;
        if uppercase {
            code -= CASE_OFFSET;
        }
        // shifted is 0..26 and the offset only toggles case, so code is
        // always an ASCII letter.
        char::from(code as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(text: &str, shift: i32, uppercase: bool) -> String {
        let mut alpha = AlphaShift::new(shift);
        text.chars().map(|c| alpha.apply(c, uppercase)).collect()
    }

    #[test]
    fn sign_alternates_across_letters() {
        // First letter sees -3 (flip happens before the transform), second +3.
        assert_eq!(pass("abc", 3, false), "xez");
    }

    #[test]
    fn decode_mirrors_encode() {
        let encoded = pass("cardholder", 3, false);
        assert_eq!(pass(&encoded, -3, false), "cardholder");
    }

    #[test]
    fn case_perturbation_only_changes_case() {
        let plain = pass("abc", 3, false);
        let upper = pass("abc", 3, true);
        assert_eq!(upper, plain.to_ascii_uppercase());
    }

    #[test]
    fn decode_normalizes_case() {
        let upper = pass("name", 3, true);
        assert_eq!(pass(&upper, -3, false), "name");
    }

    #[test]
    fn wraps_at_both_alphabet_ends() {
        // 'a' with an effective -3 wraps to 'x'; 'z' with +3 wraps to 'c'.
        assert_eq!(pass("a", 3, false), "x");
        assert_eq!(pass("zz", 3, false), "wc");
    }
}

//! Chunk-level encode/decode: runs the per-character ciphers over each chunk
//! and handles delimiter insertion and removal.

use crate::alpha::AlphaShift;
use crate::digit::{decode_digit, encode_digit};
use crate::entropy::{EntropySource, PinnedEntropy, ThreadEntropy};
use crate::symbol::{is_delimiter, swap};

/// Seed for the alternating shift; decode uses its negation.
pub const SHIFT_AMOUNT: i32 = 3;

/// Separator token joining fields on the encode-input side.
///
/// Never appears in an encoded key: encoding splits on it and replaces it
/// with a randomly drawn delimiter symbol.
pub const FIELD_SEPARATOR: &str = "xxxxxxx";

/// True if `text` cannot round-trip through the codec because it contains a
/// reserved delimiter symbol or the field-separator token.
///
/// The codec itself never checks this; it is a precondition callers enforce
/// at validation time.
pub fn contains_reserved_text(text: &str) -> bool {
    text.chars().any(is_delimiter) || text.to_lowercase().contains(FIELD_SEPARATOR)
}

/// One cipher pass over a single chunk.
///
/// Letters go through the alternating-shift cipher, digits through the
/// modular-multiplication cipher, `/` and `?` through the fixed swap, and
/// everything else is copied unchanged. The case perturbation is drawn from
/// `entropy` on encode and hard-wired off on decode.
fn transform_chunk<E: EntropySource>(
    chunk: &str,
    shift: i32,
    encode: bool,
    entropy: &mut E,
) -> String {
    let mut alpha = AlphaShift::new(shift);
    let mut out = String::with_capacity(chunk.len());

    for c in chunk.chars() {
        if c.is_ascii_alphabetic() {
            let uppercase = encode && entropy.flip_case();
            out.push(alpha.apply(c, uppercase));
        } else if c.is_ascii_digit() {
            out.push(if encode {
                encode_digit(c)
            } else {
                decode_digit(c)
            });
        } else {
            out.push(swap(c));
        }
    }

    out
}

/// Encodes separator-joined field text into an opaque key.
///
/// The input is lowercased, split on [`FIELD_SEPARATOR`], each chunk is
/// ciphered, and one delimiter drawn from `entropy` is appended per chunk
/// (independently, including after the last).
pub fn encode_with<E: EntropySource>(text: &str, entropy: &mut E) -> String {
    let text = text.to_lowercase();
    let mut key = String::with_capacity(text.len());

    for chunk in text.split(FIELD_SEPARATOR) {
        key.push_str(&transform_chunk(chunk, SHIFT_AMOUNT, true, entropy));
        key.push(entropy.delimiter());
    }

    key
}

/// [`encode_with`] drawing from the thread-local generator.
pub fn encode(text: &str) -> String {
    encode_with(text, &mut ThreadEntropy)
}

/// Decodes a key back into space-joined field text.
///
/// Every delimiter occurrence becomes a space (adjacent delimiters yield
/// consecutive spaces), the result is lowercased and split on whitespace
/// dropping empty tokens, each token is deciphered, and the tokens are
/// rejoined with single spaces.
pub fn decode(key: &str) -> String {
    let spaced: String = key
        .chars()
        .map(|c| if is_delimiter(c) { ' ' } else { c })
        .collect();
    let spaced = spaced.to_lowercase();

    // Decode never draws entropy; the pinned source is just a type to thread.
    let mut entropy = PinnedEntropy::default();
    let decoded: Vec<String> = spaced
        .split_whitespace()
        .map(|token| transform_chunk(token, -SHIFT_AMOUNT, false, &mut entropy))
        .collect();

    decoded.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pinned() -> PinnedEntropy {
        PinnedEntropy::default()
    }

    #[test]
    fn encode_appends_one_delimiter_per_chunk() {
        let key = encode_with(&format!("abc{FIELD_SEPARATOR}123"), &mut pinned());
        assert_eq!(key, "xez.741.");
    }

    #[test]
    fn decode_round_trips_joined_fields() {
        let text = format!("sbi{FIELD_SEPARATOR}4242{FIELD_SEPARATOR}12/26");
        let key = encode_with(&text, &mut pinned());
        assert_eq!(decode(&key), "sbi 4242 12/26");
    }

    #[test]
    fn decode_lowercases_perturbed_case() {
        let mut entropy = PinnedEntropy {
            uppercase: true,
            ..PinnedEntropy::default()
        };
        let key = encode_with("holder", &mut entropy);
        assert_eq!(decode(&key), "holder");
    }

    #[test]
    fn decode_collapses_adjacent_delimiters() {
        let key = concat!("xez", ".,!", "741", "~");
        assert_eq!(decode(key), "abc 123");
    }

    #[test]
    fn question_mark_carries_through_as_slash() {
        let key = encode_with("mary?anne", &mut pinned());
        assert!(key.contains('/'));
        assert_eq!(decode(&key), "mary?anne");
    }

    #[test]
    fn reserved_text_detection() {
        assert!(contains_reserved_text("santander!"));
        assert!(contains_reserved_text("abcxxxxxxxdef"));
        assert!(!contains_reserved_text("state bank of india"));
        assert!(!contains_reserved_text("12/26"));
    }
}

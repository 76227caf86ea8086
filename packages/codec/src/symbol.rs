//! Fixed symbol handling: the `/` ↔ `?` transposition and the delimiter
//! alphabet used to join encoded chunks.

/// Punctuation symbols reserved as chunk delimiters.
///
/// One of these is appended after every encoded chunk; decoding turns every
/// occurrence back into whitespace. Field text containing any of them breaks
/// the round trip, which is why callers sanitize with
/// [`contains_reserved_text`](crate::word::contains_reserved_text) before
/// encoding. `/` and `?` are deliberately absent: they carry word-internal
/// spaces through the pipeline instead.
pub const DELIMITERS: [char; 28] = [
    '.', ',', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '_', '+', '=', '~', '`', '[',
    ']', '{', '}', '|', '<', '>', ':', ';', '\'',
];

/// True if `c` is one of the reserved chunk delimiters.
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// The fixed `/` ↔ `?` involution; every other character is returned as is.
///
/// Applying it twice is the identity, which is what makes it usable as a
/// space carrier: callers turn spaces into `?` before encoding and turn
/// `/`/`?` back into spaces after decoding.
pub fn swap(c: char) -> char {
    match c {
        '/' => '?',
        '?' => '/',
        other => other,
    }
}

//! Injectable randomness for the two non-deterministic points of the codec.
//!
//! Encoding consults randomness in exactly two places: the per-letter case
//! perturbation and the per-chunk delimiter draw. Both go through
//! [`EntropySource`] so callers that need reproducible keys (tests, fixtures)
//! can pin the answers. Decoding never consults the source.

use rand::Rng;

use crate::symbol::DELIMITERS;

/// Source of the codec's encode-time randomness.
pub trait EntropySource {
    /// Whether the next emitted letter is uppercased.
    fn flip_case(&mut self) -> bool;

    /// The delimiter appended after the next encoded chunk.
    ///
    /// Must return a character from [`DELIMITERS`]; anything else produces a
    /// key the decoder cannot re-split.
    fn delimiter(&mut self) -> char;
}

/// Default source backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn flip_case(&mut self) -> bool {
        rand::rng().random_bool(0.5)
    }

    fn delimiter(&mut self) -> char {
        DELIMITERS[rand::rng().random_range(0..DELIMITERS.len())]
    }
}

/// Fixed-answer source for deterministic encoding.
///
/// Defaults to no case perturbation and `'.'` delimiters, which keeps
/// encoded output a pure function of its input.
#[derive(Debug, Clone, Copy)]
pub struct PinnedEntropy {
    /// Answer returned for every case-perturbation draw.
    pub uppercase: bool,
    /// Delimiter returned for every chunk.
    pub delimiter: char,
}

impl Default for PinnedEntropy {
    fn default() -> Self {
        Self {
            uppercase: false,
            delimiter: '.',
        }
    }
}

impl EntropySource for PinnedEntropy {
    fn flip_case(&mut self) -> bool {
        self.uppercase
    }

    fn delimiter(&mut self) -> char {
        self.delimiter
    }
}

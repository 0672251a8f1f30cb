//! Character n-gram engine.
//!
//! Decomposes words into sets of contiguous character n-grams, scores two
//! words by the overlap of their gram sets, and builds an inverted
//! gram-to-word index that yields the same scores without a full scan.
//!
//! # Architecture
//!
//! - [`gram`] -- validated gram size and per-word gram sets
//! - [`similarity`] -- overlap scoring with the empty-set guard
//! - [`index`] -- inverted gram index over a fixed word list

pub mod gram;
pub mod index;
pub mod similarity;

pub use gram::{GramSet, GramSize, n_grams};
pub use index::{GramIndex, word_list_fingerprint};
pub use similarity::{overlap_score, similarity};

/// Error type for n-gram configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NgramError {
    #[error("invalid n-gram size {0}: must be at least 1")]
    InvalidGramSize(usize),
}

/// Gram size used when none is configured (bigrams).
pub const DEFAULT_GRAM_SIZE: usize = 2;

// Gram size validation and gram set construction

use std::fmt;
use std::num::NonZeroUsize;

use hashbrown::HashSet;

use crate::{DEFAULT_GRAM_SIZE, NgramError};

/// A validated n-gram length (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GramSize(NonZeroUsize);

impl GramSize {
    /// Validate a gram size. Zero is rejected rather than coerced.
    pub fn new(k: usize) -> Result<Self, NgramError> {
        NonZeroUsize::new(k)
            .map(Self)
            .ok_or(NgramError::InvalidGramSize(k))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for GramSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_GRAM_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl fmt::Display for GramSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The distinct length-`k` character substrings of one word.
///
/// Grams borrow from the word they were cut from. Length is measured in
/// `char`s, so multi-byte characters count once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GramSet<'a> {
    grams: HashSet<&'a str>,
}

impl<'a> GramSet<'a> {
    /// Decompose `word` into its set of `k`-grams.
    ///
    /// A word shorter than `k` characters yields the empty set.
    pub fn new(word: &'a str, k: GramSize) -> Self {
        let k = k.get();
        // Byte offset of every char start, plus the end of the string.
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()))
            .collect();
        let char_count = bounds.len() - 1;
        if char_count < k {
            return Self {
                grams: HashSet::new(),
            };
        }

        let mut grams = HashSet::with_capacity(char_count + 1 - k);
        for start in 0..=(char_count - k) {
            grams.insert(&word[bounds[start]..bounds[start + k]]);
        }
        Self { grams }
    }

    /// Number of distinct grams.
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    pub fn contains(&self, gram: &str) -> bool {
        self.grams.contains(gram)
    }

    /// Iterate over the grams in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.grams.iter().copied()
    }

    /// Number of grams present in both sets.
    pub fn shared_count(&self, other: &GramSet<'_>) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (&self.grams, &other.grams)
        } else {
            (&other.grams, &self.grams)
        };
        small.iter().filter(|g| large.contains(*g)).count()
    }
}

/// Return all distinct contiguous substrings of `word` that are `k`
/// characters long.
///
/// Fails with [`NgramError::InvalidGramSize`] when `k == 0`.
pub fn n_grams(word: &str, k: usize) -> Result<GramSet<'_>, NgramError> {
    Ok(GramSet::new(word, GramSize::new(k)?))
}

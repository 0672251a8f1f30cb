// Matcher configuration

use std::time::Duration;

use spellgram_ngram::GramSize;

use crate::ConfigError;

/// Number of suggestions returned when not configured otherwise.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Minimum score for threshold-filtered suggestions.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Options controlling a [`Matcher`](crate::Matcher).
///
/// Gram size is validated by construction of [`GramSize`]. Every other
/// combination of values is usable: zero `max_suggestions` yields empty
/// lists, and a threshold above 1 (or NaN) admits no candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherOptions {
    /// Length of the character n-grams compared.
    pub gram_size: GramSize,
    /// Upper bound on the length of every suggestion list.
    pub max_suggestions: usize,
    /// Minimum score for threshold-filtered operations. Scores lie in
    /// `[0, 1]` and zero scores are never suggested, so any value at or
    /// below zero admits every overlapping candidate.
    ///
    /// Candidates below it never enter ranking. Ranking first and
    /// filtering afterwards would keep the same list, since the filter
    /// removes a suffix of the rank order.
    pub threshold: f64,
    /// Wall-clock budget for one call. A scan that runs past it stops
    /// early and returns the best results found so far.
    pub deadline: Option<Duration>,
    /// Score through the inverted gram index instead of scanning every
    /// dictionary entry. Results are identical either way.
    pub use_index: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            gram_size: GramSize::default(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            threshold: DEFAULT_THRESHOLD,
            deadline: None,
            use_index: true,
        }
    }
}

impl MatcherOptions {
    /// Default options with gram size `k`.
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            gram_size: GramSize::new(k)?,
            ..Self::default()
        })
    }
}

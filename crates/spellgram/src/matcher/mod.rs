// Similarity matching: scoring scans, ranking, suggestion and correction
//
// Architecture:
//   - `status`: top-N collector with score floor and deadline budget
//   - `scan`: candidate scanners (full dictionary scan, inverted index)
//
// Every operation decomposes the query word once, hands its gram set to a
// scanner, and reads the ranked result back out of a `ScanStatus`.

pub mod scan;
pub mod status;

use std::time::Instant;

use hashbrown::HashSet;
use log::trace;
use rayon::prelude::*;
use spellgram_core::text::{normalize_word, query_tokens};
use spellgram_core::{Suggestion, WordSuggestions};
use spellgram_ngram::{GramIndex, GramSet, GramSize};

pub use scan::{CandidateScanner, FullScan, IndexedScan};
pub use status::{ScanStatus, TopN};

use crate::ConfigError;
use crate::dictionary::Dictionary;
use crate::options::MatcherOptions;

/// Ranks dictionary words by n-gram similarity to query words.
///
/// A matcher borrows its dictionary (and optional index) read-only, holds
/// no mutable state, and is `Sync`: queries from many threads may share
/// one matcher.
pub struct Matcher<'a> {
    dictionary: &'a Dictionary,
    scanner: Box<dyn CandidateScanner + Send + Sync + 'a>,
    options: MatcherOptions,
}

impl<'a> Matcher<'a> {
    /// Create a matcher that scans the whole dictionary per query.
    ///
    /// `options.use_index` is ignored; use [`Matcher::with_index`] to
    /// score through a prebuilt index.
    pub fn new(dictionary: &'a Dictionary, options: MatcherOptions) -> Self {
        Self {
            dictionary,
            scanner: Box::new(FullScan::new(dictionary, options.gram_size)),
            options,
        }
    }

    /// Create a matcher that scores through `index`, which must have been
    /// built from `dictionary` (see [`Dictionary::build_index`]) with the
    /// configured gram size.
    pub fn with_index(
        dictionary: &'a Dictionary,
        index: &'a GramIndex,
        options: MatcherOptions,
    ) -> Result<Self, ConfigError> {
        if index.gram_size() != options.gram_size {
            return Err(ConfigError::IndexMismatch {
                index: index.gram_size().get(),
                matcher: options.gram_size.get(),
            });
        }
        if index.fingerprint() != dictionary.fingerprint()
            || index.word_count() != dictionary.len()
        {
            return Err(ConfigError::ForeignIndex);
        }
        Ok(Self::indexed(dictionary, index, options))
    }

    pub(crate) fn indexed(
        dictionary: &'a Dictionary,
        index: &'a GramIndex,
        options: MatcherOptions,
    ) -> Self {
        Self {
            dictionary,
            scanner: Box::new(IndexedScan::new(dictionary, index)),
            options,
        }
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    pub fn gram_size(&self) -> GramSize {
        self.options.gram_size
    }

    /// Similarity of two words under this matcher's gram size.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let k = self.options.gram_size;
        GramSet::new(a, k).similarity(&GramSet::new(b, k))
    }

    /// Ranked suggestions for one word, at most `max_suggestions` long.
    ///
    /// The word is trimmed and lowercased first. Only candidates sharing
    /// at least one gram with it are returned; a word with no such
    /// candidate (including any word shorter than the gram size) yields
    /// an empty list. The threshold is not applied.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        let Some(word) = normalize_word(word) else {
            return Vec::new();
        };
        self.rank_word(&word, self.options.max_suggestions, 0.0, self.deadline())
    }

    /// Threshold-filtered suggestions for every distinct token of `text`.
    ///
    /// Tokens are split on whitespace and lowercased. Candidates scoring
    /// below the threshold never enter ranking; each list holds at most
    /// `max_suggestions` entries. Results follow first-occurrence order of
    /// the tokens, and a repeated token appears once.
    pub fn suggest_above_threshold(&self, text: &str) -> Vec<WordSuggestions> {
        let deadline = self.deadline();
        unique_tokens(text)
            .into_par_iter()
            .map(|word| {
                let suggestions = self.rank_word(
                    &word,
                    self.options.max_suggestions,
                    self.options.threshold,
                    deadline,
                );
                WordSuggestions { word, suggestions }
            })
            .collect()
    }

    /// Best correction for one word.
    ///
    /// Returns the highest-ranked candidate, or `word` unchanged when no
    /// candidate scores above zero. A word already in the dictionary is
    /// returned as its normalized self, unless it is too short to have any
    /// gram (it then scores zero against everything, itself included).
    pub fn correct(&self, word: &str) -> String {
        match normalize_word(word) {
            Some(normalized) => self
                .correct_token(&normalized, self.deadline())
                .unwrap_or_else(|| word.to_string()),
            None => word.to_string(),
        }
    }

    /// Correct every token of `text` independently and join the results
    /// with single spaces.
    ///
    /// Tokens are lowercased; original spacing is not preserved.
    pub fn correct_text(&self, text: &str) -> String {
        let deadline = self.deadline();
        let tokens: Vec<String> = query_tokens(text).collect();
        let corrected: Vec<String> = tokens
            .into_par_iter()
            .map(|token| self.correct_token(&token, deadline).unwrap_or(token))
            .collect();
        corrected.join(" ")
    }

    /// Best candidate for an already-normalized token, tracking only the
    /// running maximum.
    fn correct_token(&self, token: &str, deadline: Option<Instant>) -> Option<String> {
        let query = self.query(token)?;
        if self.dictionary.contains(token) {
            return Some(token.to_string());
        }
        self.rank(&query, 1, 0.0, deadline)
            .into_iter()
            .next()
            .map(|s| s.word)
    }

    /// Gram set of `word`, or `None` if it is too short to have any.
    fn query<'w>(&self, word: &'w str) -> Option<GramSet<'w>> {
        let query = GramSet::new(word, self.options.gram_size);
        if query.is_empty() {
            trace!("{word:?} has no {}-grams, nothing to rank", self.options.gram_size);
            return None;
        }
        Some(query)
    }

    /// Score `word` against the dictionary and keep the `capacity` best
    /// candidates with a positive score of at least `min_score`.
    fn rank_word(
        &self,
        word: &str,
        capacity: usize,
        min_score: f64,
        deadline: Option<Instant>,
    ) -> Vec<Suggestion> {
        if capacity == 0 {
            return Vec::new();
        }
        match self.query(word) {
            Some(query) => self.rank(&query, capacity, min_score, deadline),
            None => Vec::new(),
        }
    }

    fn rank(
        &self,
        query: &GramSet<'_>,
        capacity: usize,
        min_score: f64,
        deadline: Option<Instant>,
    ) -> Vec<Suggestion> {
        let mut status = ScanStatus::new(capacity, min_score, deadline);
        self.scanner.scan(query, &mut status);
        trace!(
            "scored {} candidates{}",
            status.scanned(),
            if status.timed_out() { " (timed out)" } else { "" }
        );
        status.into_suggestions()
    }

    fn deadline(&self) -> Option<Instant> {
        self.options
            .deadline
            .and_then(|budget| Instant::now().checked_add(budget))
    }
}

/// Lowercased whitespace tokens of `text`, repeats removed, first
/// occurrence order kept.
fn unique_tokens(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    query_tokens(text)
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

// =========================================================================
// One-shot functions
// =========================================================================

fn one_shot_options(k: usize) -> Result<MatcherOptions, ConfigError> {
    Ok(MatcherOptions {
        gram_size: GramSize::new(k)?,
        use_index: false,
        ..MatcherOptions::default()
    })
}

/// Top `top_n` suggestions for `word` by `k`-gram similarity.
pub fn suggest(
    word: &str,
    dictionary: &Dictionary,
    k: usize,
    top_n: usize,
) -> Result<Vec<Suggestion>, ConfigError> {
    let options = MatcherOptions {
        max_suggestions: top_n,
        ..one_shot_options(k)?
    };
    Ok(Matcher::new(dictionary, options).suggest(word))
}

/// Suggestions scoring at least `threshold` for each token of `text`,
/// capped at the default suggestion count.
pub fn suggest_above_threshold(
    text: &str,
    dictionary: &Dictionary,
    k: usize,
    threshold: f64,
) -> Result<Vec<WordSuggestions>, ConfigError> {
    let options = MatcherOptions {
        threshold,
        ..one_shot_options(k)?
    };
    Ok(Matcher::new(dictionary, options).suggest_above_threshold(text))
}

/// Single best correction for `word`, or `word` itself if nothing matches.
pub fn correct(word: &str, dictionary: &Dictionary, k: usize) -> Result<String, ConfigError> {
    Ok(Matcher::new(dictionary, one_shot_options(k)?).correct(word))
}

/// Correct each whitespace-separated token of `text`.
pub fn correct_text(
    text: &str,
    dictionary: &Dictionary,
    k: usize,
) -> Result<String, ConfigError> {
    Ok(Matcher::new(dictionary, one_shot_options(k)?).correct_text(text))
}

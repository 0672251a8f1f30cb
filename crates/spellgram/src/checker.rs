// SpellChecker: owning handle over dictionary, gram index and options
//
// Design notes:
// - The handle owns the Dictionary and (when enabled) the GramIndex, and
//   creates a borrowing Matcher on the fly in each method call, so no
//   self-referential struct is needed.
// - The index is always built from the owned dictionary, so the checks of
//   `Matcher::with_index` are skipped. A gram size change rebuilds it.
// - No interior mutability: the handle is `Sync` and can be shared across
//   worker threads behind an `Arc`.

use std::path::Path;
use std::time::Duration;

use log::debug;
use spellgram_core::{Suggestion, WordSuggestions};
use spellgram_ngram::{GramIndex, GramSize};

use crate::dictionary::Dictionary;
use crate::matcher::Matcher;
use crate::ConfigError;
use crate::dictionary::LoadError;
use crate::options::MatcherOptions;

/// Top-level spelling correction handle.
pub struct SpellChecker {
    dictionary: Dictionary,
    /// Present iff `options.use_index`; always built with `options.gram_size`.
    index: Option<GramIndex>,
    options: MatcherOptions,
}

impl SpellChecker {
    /// Create a checker over an already-loaded dictionary.
    pub fn new(dictionary: Dictionary, options: MatcherOptions) -> Self {
        let index = options
            .use_index
            .then(|| dictionary.build_index(options.gram_size));
        Self {
            dictionary,
            index,
            options,
        }
    }

    /// Load a comma-separated word list file and create a checker over it.
    pub fn from_path(path: impl AsRef<Path>, options: MatcherOptions) -> Result<Self, LoadError> {
        Ok(Self::new(Dictionary::load(path)?, options))
    }

    /// Parse a comma-separated word list and create a checker over it.
    pub fn from_text(source: &str, options: MatcherOptions) -> Result<Self, LoadError> {
        Ok(Self::new(Dictionary::from_text(source)?, options))
    }

    /// A matcher borrowing this checker's state.
    pub fn matcher(&self) -> Matcher<'_> {
        match &self.index {
            Some(index) => Matcher::indexed(&self.dictionary, index, self.options),
            None => Matcher::new(&self.dictionary, self.options),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether `word` is a dictionary entry (case-insensitive).
    pub fn spell(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Ranked suggestions for one word, best first.
    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.matcher().suggest(word)
    }

    /// Threshold-filtered suggestions for every distinct token of `text`.
    pub fn suggestions(&self, text: &str) -> Vec<WordSuggestions> {
        self.matcher().suggest_above_threshold(text)
    }

    /// Best correction for one word, or the word itself.
    pub fn correct(&self, word: &str) -> String {
        self.matcher().correct(word)
    }

    /// Correct every token of `text`, joined by single spaces.
    pub fn correct_text(&self, text: &str) -> String {
        self.matcher().correct_text(text)
    }

    /// Similarity of two words under the configured gram size.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        self.matcher().similarity(a, b)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// The gram index, if indexed scoring is enabled.
    pub fn index(&self) -> Option<&GramIndex> {
        self.index.as_ref()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Change the gram size, rebuilding the index if one is kept.
    pub fn set_gram_size(&mut self, k: usize) -> Result<(), ConfigError> {
        let gram_size = GramSize::new(k)?;
        if gram_size == self.options.gram_size {
            return Ok(());
        }
        self.options.gram_size = gram_size;
        if self.index.is_some() {
            debug!("gram size changed to {gram_size}, rebuilding index");
            self.index = Some(self.dictionary.build_index(gram_size));
        }
        Ok(())
    }

    /// Set the maximum number of suggestions per word. Zero turns every
    /// suggestion list empty.
    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.options.max_suggestions = max_suggestions;
    }

    /// Set the minimum score for threshold-filtered suggestions.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.options.threshold = threshold;
    }

    /// Set or clear the per-call time budget.
    pub fn set_deadline(&mut self, deadline: Option<Duration>) {
        self.options.deadline = deadline;
    }

    /// Switch between indexed scoring and full dictionary scans.
    pub fn set_use_index(&mut self, use_index: bool) {
        self.options.use_index = use_index;
        match (use_index, self.index.is_some()) {
            (true, false) => {
                self.index = Some(self.dictionary.build_index(self.options.gram_size));
            }
            (false, true) => self.index = None,
            _ => {}
        }
    }
}

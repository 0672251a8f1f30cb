//! N-gram similarity spelling correction.
//!
//! Given a fixed dictionary of known-correct words, finds the entries most
//! similar to a (possibly misspelled) query word by comparing character
//! n-gram sets, and returns ranked suggestions or a single best correction.
//!
//! # Architecture
//!
//! - [`dictionary`] -- immutable, normalized candidate word list
//! - [`options`] -- explicit matcher configuration
//! - [`matcher`] -- scoring scans, top-N collection, suggestion and
//!   correction operations
//! - [`checker`] -- owning handle bundling dictionary, index and options
//!
//! ```no_run
//! use spellgram::{Dictionary, correct};
//!
//! let dictionary = Dictionary::from_text("glad, wide, bright, light")?;
//! assert_eq!(correct("gld", &dictionary, 2)?, "glad");
//! # Ok::<(), spellgram::SpellgramError>(())
//! ```

pub mod checker;
pub mod dictionary;
pub mod matcher;
pub mod options;

pub use checker::SpellChecker;
pub use dictionary::{Dictionary, LoadError};
pub use matcher::{Matcher, correct, correct_text, suggest, suggest_above_threshold};
pub use options::MatcherOptions;

pub use spellgram_core::{Suggestion, WordSuggestions};
pub use spellgram_ngram::{GramIndex, GramSet, GramSize, NgramError, n_grams, similarity};

/// Invalid matcher configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    GramSize(#[from] NgramError),

    #[error("index built for {index}-grams but the matcher uses {matcher}-grams")]
    IndexMismatch { index: usize, matcher: usize },

    /// The index was built from another word list, so its word ids do not
    /// name this dictionary's entries.
    #[error("index was built from a different word list than the dictionary")]
    ForeignIndex,
}

/// Any failure of the one-shot API: loading a dictionary or configuring
/// a matcher.
#[derive(Debug, thiserror::Error)]
pub enum SpellgramError {
    /// The dictionary source could not be loaded.
    #[error("failed to load dictionary: {0}")]
    Load(#[from] LoadError),

    /// The options were rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// Dictionary: the immutable pool of candidate words
//
// Built once from a comma-separated word list. Entries are trimmed,
// lowercased and deduplicated, then stored sorted so that iteration order
// (and the word ids handed to the gram index) never depends on hashing.

use std::path::{Path, PathBuf};

use log::debug;
use spellgram_core::text::{dictionary_entries, normalize_word};
use spellgram_ngram::{GramIndex, GramSize, word_list_fingerprint};

/// Dictionary loading failure. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing remained after trimming and dropping empty entries.
    #[error("dictionary is empty after normalization")]
    Empty,
}

/// An immutable set of normalized candidate words.
///
/// Guaranteed non-empty; every entry is non-empty, trimmed and lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// Sorted ascending, no duplicates.
    words: Box<[String]>,
    /// `word_list_fingerprint` of `words`, in order.
    fingerprint: u64,
}

impl Dictionary {
    /// Parse a comma-separated word list.
    pub fn from_text(source: &str) -> Result<Self, LoadError> {
        Self::from_normalized(dictionary_entries(source).collect())
    }

    /// Build a dictionary from individual words, normalizing each.
    pub fn from_words<I, S>(words: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_normalized(
            words
                .into_iter()
                .filter_map(|w| normalize_word(w.as_ref()))
                .collect(),
        )
    }

    /// Read and parse a comma-separated word list file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_text(&source)?;
        debug!("loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    fn from_normalized(mut words: Vec<String>) -> Result<Self, LoadError> {
        words.sort_unstable();
        words.dedup();
        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        let fingerprint = word_list_fingerprint(words.iter().map(String::as_str));
        Ok(Self {
            words: words.into_boxed_slice(),
            fingerprint,
        })
    }

    /// Whether `word` (after normalization) is a dictionary entry.
    pub fn contains(&self, word: &str) -> bool {
        match normalize_word(word) {
            Some(w) => self.words.binary_search(&w).is_ok(),
            None => false,
        }
    }

    /// Iterate over the entries in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Entry with the given id (its position in iteration order).
    pub fn get(&self, id: usize) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Identifies this word list; matches the fingerprint of every
    /// [`GramIndex`] built from it.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Build an inverted gram index whose word ids are this dictionary's.
    pub fn build_index(&self, gram_size: GramSize) -> GramIndex {
        GramIndex::build(self.iter(), gram_size)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_normalizes_and_dedups() {
        let dict = Dictionary::from_text(" Glad ,wide, GLAD,bright,, light ,wide").unwrap();
        let words: Vec<&str> = dict.iter().collect();
        assert_eq!(words, ["bright", "glad", "light", "wide"]);
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn empty_source_is_load_error() {
        assert!(matches!(Dictionary::from_text(""), Err(LoadError::Empty)));
        assert!(matches!(
            Dictionary::from_text(" , ,\n,"),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn contains_normalizes_query() {
        let dict = Dictionary::from_text("glad,wide").unwrap();
        assert!(dict.contains("glad"));
        assert!(dict.contains(" GLAD "));
        assert!(!dict.contains("gld"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn from_words_matches_from_text() {
        let a = Dictionary::from_words(["Light", "bright ", "light"]).unwrap();
        let b = Dictionary::from_text("light,bright").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn get_follows_iteration_order() {
        let dict = Dictionary::from_text("b,a,c").unwrap();
        assert_eq!(dict.get(0), Some("a"));
        assert_eq!(dict.get(2), Some("c"));
        assert_eq!(dict.get(3), None);
        let via_ref: Vec<&str> = (&dict).into_iter().collect();
        assert_eq!(via_ref, ["a", "b", "c"]);
    }

    #[test]
    fn built_index_carries_dictionary_fingerprint() {
        let dict = Dictionary::from_text("glad, wide, bright, light").unwrap();
        let index = dict.build_index(GramSize::default());
        assert_eq!(index.fingerprint(), dict.fingerprint());
        assert_eq!(index.word_count(), dict.len());

        let other = Dictionary::from_text("apple, banana, cherry, gld").unwrap();
        assert_ne!(other.fingerprint(), dict.fingerprint());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Dictionary::load("/nonexistent/spellgram/words.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/spellgram/words.txt"));
    }

    #[test]
    fn load_reads_file() {
        let name = format!("spellgram-dict-{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "Glad, wide,\nbright").unwrap();
        let dict = Dictionary::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("bright"));
    }
}

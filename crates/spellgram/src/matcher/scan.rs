// Candidate scanners: full dictionary scan and inverted-index scan

use spellgram_ngram::{GramIndex, GramSet, GramSize};

use super::status::ScanStatus;
use crate::dictionary::Dictionary;

/// Scores a query's gram set against dictionary candidates and offers
/// every score to `status`.
///
/// Implementations must produce the same scores for the same candidates;
/// they may differ in which zero-score candidates they bother to visit.
pub trait CandidateScanner {
    fn scan(&self, query: &GramSet<'_>, status: &mut ScanStatus);
}

/// Visits every dictionary entry, decomposing each on the fly.
pub struct FullScan<'a> {
    dictionary: &'a Dictionary,
    gram_size: GramSize,
}

impl<'a> FullScan<'a> {
    pub fn new(dictionary: &'a Dictionary, gram_size: GramSize) -> Self {
        Self {
            dictionary,
            gram_size,
        }
    }
}

impl CandidateScanner for FullScan<'_> {
    fn scan(&self, query: &GramSet<'_>, status: &mut ScanStatus) {
        for word in self.dictionary.iter() {
            if status.should_abort() {
                break;
            }
            let score = query.similarity(&GramSet::new(word, self.gram_size));
            status.charge();
            status.offer(word, score);
        }
    }
}

/// Visits only entries sharing at least one gram with the query.
pub struct IndexedScan<'a> {
    dictionary: &'a Dictionary,
    index: &'a GramIndex,
}

impl<'a> IndexedScan<'a> {
    /// The index must have been built from `dictionary`.
    pub fn new(dictionary: &'a Dictionary, index: &'a GramIndex) -> Self {
        Self { dictionary, index }
    }
}

impl CandidateScanner for IndexedScan<'_> {
    fn scan(&self, query: &GramSet<'_>, status: &mut ScanStatus) {
        for (id, score) in self.index.scores(query) {
            if status.should_abort() {
                break;
            }
            status.charge();
            if let Some(word) = self.dictionary.get(id) {
                status.offer(word, score);
            }
        }
    }
}

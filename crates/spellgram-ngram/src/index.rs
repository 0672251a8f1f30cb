// Inverted gram index: gram -> ids of words containing it
//
// Scoring a query through the index touches only words that share at
// least one gram with it. The shared count per word falls out of the
// posting lists, and the stored per-word gram count supplies the other
// side of the denominator, so scores match `GramSet::similarity` exactly.

use std::hash::{DefaultHasher, Hash, Hasher};

use hashbrown::HashMap;
use log::debug;

use crate::gram::{GramSet, GramSize};
use crate::similarity::overlap_score;

/// Inverted index over a fixed, ordered word list.
///
/// Word ids are positions in the list the index was built from. The list
/// itself is not kept, only its [`word_list_fingerprint`], so callers can
/// check that ids will be resolved against the same list.
#[derive(Debug, Clone)]
pub struct GramIndex {
    gram_size: GramSize,
    fingerprint: u64,
    /// Posting list per gram, ids ascending.
    postings: HashMap<Box<str>, Vec<usize>>,
    /// Number of distinct grams of each word, by id.
    gram_counts: Vec<usize>,
}

impl GramIndex {
    /// Build an index over `words` with grams of size `gram_size`.
    pub fn build<'w, I>(words: I, gram_size: GramSize) -> Self
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut postings: HashMap<Box<str>, Vec<usize>> = HashMap::new();
        let mut gram_counts = Vec::new();
        let mut hasher = DefaultHasher::new();

        for (id, word) in words.into_iter().enumerate() {
            word.hash(&mut hasher);
            let grams = GramSet::new(word, gram_size);
            gram_counts.push(grams.len());
            for gram in grams.iter() {
                match postings.get_mut(gram) {
                    Some(list) => list.push(id),
                    None => {
                        postings.insert(gram.into(), vec![id]);
                    }
                }
            }
        }

        debug!(
            "built {gram_size}-gram index: {} words, {} distinct grams",
            gram_counts.len(),
            postings.len()
        );

        Self {
            gram_size,
            fingerprint: hasher.finish(),
            postings,
            gram_counts,
        }
    }

    pub fn gram_size(&self) -> GramSize {
        self.gram_size
    }

    /// Number of indexed words.
    pub fn word_count(&self) -> usize {
        self.gram_counts.len()
    }

    /// Fingerprint of the word list the index was built from.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Ids of words containing `gram`, ascending.
    pub fn postings(&self, gram: &str) -> &[usize] {
        self.postings.get(gram).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct gram count of the word with the given id.
    pub fn grams_of(&self, id: usize) -> Option<usize> {
        self.gram_counts.get(id).copied()
    }

    /// Count shared grams between `query` and every word overlapping it.
    ///
    /// Words sharing no gram with the query are absent from the result.
    pub fn shared_counts(&self, query: &GramSet<'_>) -> HashMap<usize, usize> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for gram in query.iter() {
            for &id in self.postings(gram) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Score `query` against every overlapping word, yielding
    /// `(id, score)` pairs in unspecified order.
    pub fn scores<'s>(&'s self, query: &GramSet<'_>) -> impl Iterator<Item = (usize, f64)> + 's {
        let query_len = query.len();
        self.shared_counts(query)
            .into_iter()
            .map(move |(id, shared)| {
                let own = self.gram_counts[id];
                (id, overlap_score(shared, query_len, own))
            })
    }
}

/// Order-sensitive fingerprint of a word list.
///
/// Equal to [`GramIndex::fingerprint`] of an index built from the same
/// words in the same order.
pub fn word_list_fingerprint<'w>(words: impl IntoIterator<Item = &'w str>) -> u64 {
    let mut hasher = DefaultHasher::new();
    for word in words {
        word.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["bright", "glad", "light", "wide", "a"];

    fn bigram() -> GramSize {
        GramSize::new(2).unwrap()
    }

    #[test]
    fn build_counts_words_and_grams() {
        let index = GramIndex::build(WORDS.iter().copied(), bigram());
        assert_eq!(index.word_count(), 5);
        assert_eq!(index.grams_of(0), Some(5)); // br ri ig gh ht
        assert_eq!(index.grams_of(4), Some(0));
        assert_eq!(index.grams_of(99), None);
    }

    #[test]
    fn postings_list_word_ids_ascending() {
        let index = GramIndex::build(WORDS.iter().copied(), bigram());
        assert_eq!(index.postings("gh"), &[0, 2]);
        assert_eq!(index.postings("gl"), &[1]);
        assert!(index.postings("zz").is_empty());
    }

    #[test]
    fn shared_counts_skip_disjoint_words() {
        let index = GramIndex::build(WORDS.iter().copied(), bigram());
        let query = GramSet::new("lite", bigram());
        let counts = index.shared_counts(&query);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&2), Some(&1));
    }

    #[test]
    fn indexed_scores_match_direct_similarity() {
        let index = GramIndex::build(WORDS.iter().copied(), bigram());
        for query_word in ["gld", "lite", "brigt", "wid", "ight", "x"] {
            let query = GramSet::new(query_word, bigram());
            let mut seen = 0;
            for (id, score) in index.scores(&query) {
                let direct = query.similarity(&GramSet::new(WORDS[id], bigram()));
                assert_eq!(score, direct, "{query_word} vs {}", WORDS[id]);
                assert!(score > 0.0);
                seen += 1;
            }
            let expected = WORDS
                .iter()
                .filter(|w| query.similarity(&GramSet::new(w, bigram())) > 0.0)
                .count();
            assert_eq!(seen, expected, "{query_word}");
        }
    }

    #[test]
    fn fingerprint_identifies_the_word_list() {
        let index = GramIndex::build(WORDS.iter().copied(), bigram());
        assert_eq!(index.fingerprint(), word_list_fingerprint(WORDS.iter().copied()));

        // Same length, different words.
        let other = ["apple", "banana", "cherry", "gld", "a"];
        assert_ne!(index.fingerprint(), word_list_fingerprint(other));
        // Same words, different order.
        assert_ne!(
            index.fingerprint(),
            word_list_fingerprint(WORDS.iter().rev().copied())
        );
        // The gram size does not enter the fingerprint.
        let trigrams = GramIndex::build(WORDS.iter().copied(), GramSize::new(3).unwrap());
        assert_eq!(index.fingerprint(), trigrams.fingerprint());
    }

    #[test]
    fn empty_query_has_no_scores() {
        let index = GramIndex::build(WORDS.iter().copied(), bigram());
        let query = GramSet::new("a", bigram());
        assert_eq!(index.scores(&query).count(), 0);
    }
}

// Scan status: top-N collection, score floor and deadline tracking

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use log::warn;
use spellgram_core::Suggestion;
use spellgram_core::suggestion::rank_order;

/// How many scored candidates pass between two clock reads.
const DEADLINE_CHECK_INTERVAL: usize = 64;

/// Heap entry whose `Ord` is rank order: the *greatest* entry is the
/// worst-ranked one, so `BinaryHeap::peek` exposes the next eviction.
#[derive(Debug)]
struct Ranked(Suggestion);

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.rank_cmp(&other.0)
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Keeps the `capacity` best-ranked candidates offered to it.
///
/// The result depends only on the multiset of offers, never on the order
/// they arrive in, because rank order is total (score, then word).
#[derive(Debug)]
pub struct TopN {
    capacity: usize,
    heap: BinaryHeap<Ranked>,
}

impl TopN {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(1024)),
        }
    }

    /// Offer a candidate; it is kept if it ranks among the best so far.
    pub fn offer(&mut self, word: &str, score: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() == self.capacity {
            let Some(worst) = self.heap.peek() else {
                return;
            };
            if rank_order(word, score, &worst.0.word, worst.0.score) != Ordering::Less {
                return;
            }
            self.heap.pop();
        }
        self.heap.push(Ranked(Suggestion::new(word, score)));
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consume the collector, returning entries best first.
    pub fn into_sorted(self) -> Vec<Suggestion> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Ranked(suggestion)| suggestion)
            .collect()
    }
}

/// Tracks one scan: collected candidates, the score floor a candidate must
/// reach, and the optional deadline.
///
/// Scanners call [`charge`](Self::charge) once per scored candidate and
/// stop as soon as [`should_abort`](Self::should_abort) returns `true`.
#[derive(Debug)]
pub struct ScanStatus {
    collector: TopN,
    /// Inclusive floor; zero scores are rejected regardless.
    min_score: f64,
    deadline: Option<Instant>,
    scanned: usize,
    timed_out: bool,
}

impl ScanStatus {
    /// Create a status keeping at most `capacity` candidates with a
    /// positive score of at least `min_score`.
    pub fn new(capacity: usize, min_score: f64, deadline: Option<Instant>) -> Self {
        Self {
            collector: TopN::new(capacity),
            min_score,
            deadline,
            scanned: 0,
            timed_out: false,
        }
    }

    /// Returns `true` once the deadline has been observed to pass.
    pub fn should_abort(&self) -> bool {
        self.timed_out
    }

    /// Count one scored candidate, reading the clock every
    /// `DEADLINE_CHECK_INTERVAL` candidates.
    pub fn charge(&mut self) {
        self.scanned += 1;
        if self.timed_out || self.scanned % DEADLINE_CHECK_INTERVAL != 0 {
            return;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                warn!(
                    "deadline exceeded after scoring {} candidates, returning partial results",
                    self.scanned
                );
                self.timed_out = true;
            }
        }
    }

    /// Offer a scored candidate. Scores of zero or below the floor are
    /// discarded; a NaN floor admits nothing.
    pub fn offer(&mut self, word: &str, score: f64) {
        let admitted = score > 0.0 && score >= self.min_score;
        if !admitted {
            return;
        }
        self.collector.offer(word, score);
    }

    /// Number of candidates scored so far.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Consume the status and return the kept candidates, best first.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.collector.into_sorted()
    }
}

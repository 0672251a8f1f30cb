// Suggestion types and the ranking order shared by every matcher

use std::cmp::Ordering;

/// A dictionary word proposed as a correction, with its similarity score.
///
/// Scores lie in `[0, 1]`; higher is better.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    /// The suggested dictionary word.
    pub word: String,
    /// Gram overlap score against the query word.
    pub score: f64,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }

    /// Compare two suggestions by rank.
    ///
    /// `Ordering::Less` means `self` ranks *before* `other`: higher score
    /// first, ties broken by ascending byte-wise word order.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        rank_order(&self.word, self.score, &other.word, other.score)
    }
}

/// Rank order over `(word, score)` pairs without requiring owned values.
///
/// Descending score, then ascending word. Scores are compared with
/// `f64::total_cmp`, so the order is total even for non-finite input.
pub fn rank_order(a_word: &str, a_score: f64, b_word: &str, b_score: f64) -> Ordering {
    b_score
        .total_cmp(&a_score)
        .then_with(|| a_word.cmp(b_word))
}

/// Suggestions computed for one token of a multi-word query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordSuggestions {
    /// The normalized query token.
    pub word: String,
    /// Ranked suggestions for the token (possibly empty).
    pub suggestions: Vec<Suggestion>,
}

impl WordSuggestions {
    /// Best-ranked suggestion, if any.
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_score_ranks_first() {
        let a = Suggestion::new("glad", 0.5);
        let b = Suggestion::new("alad", 0.25);
        assert_eq!(a.rank_cmp(&b), Ordering::Less);
        assert_eq!(b.rank_cmp(&a), Ordering::Greater);
    }

    #[test]
    fn equal_scores_break_ties_lexicographically() {
        let a = Suggestion::new("bright", 0.5);
        let b = Suggestion::new("alright", 0.5);
        assert_eq!(b.rank_cmp(&a), Ordering::Less);
    }

    #[test]
    fn identical_entries_compare_equal() {
        let a = Suggestion::new("wide", 1.0);
        assert_eq!(a.rank_cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn rank_order_agrees_with_rank_cmp() {
        let a = Suggestion::new("light", 0.25);
        let b = Suggestion::new("bite", 0.5);
        assert_eq!(rank_order("light", 0.25, "bite", 0.5), a.rank_cmp(&b));
    }

    #[test]
    fn best_returns_first_suggestion() {
        let ws = WordSuggestions {
            word: "gld".to_string(),
            suggestions: vec![Suggestion::new("glad", 0.5), Suggestion::new("gold", 0.25)],
        };
        assert_eq!(ws.best().map(|s| s.word.as_str()), Some("glad"));

        let empty = WordSuggestions {
            word: "zz".to_string(),
            suggestions: Vec::new(),
        };
        assert!(empty.best().is_none());
    }
}

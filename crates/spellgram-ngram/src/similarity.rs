// Gram overlap scoring

use crate::NgramError;
use crate::gram::{GramSet, GramSize};

/// Overlap score from raw counts: `shared / max(len_a, len_b)`.
///
/// Returns exactly `0.0` when both sets are empty instead of dividing by
/// zero. Both the full-scan and the indexed path score through this
/// function, so their results are bit-identical.
#[inline]
pub fn overlap_score(shared: usize, len_a: usize, len_b: usize) -> f64 {
    let denominator = len_a.max(len_b);
    if denominator == 0 {
        return 0.0;
    }
    shared as f64 / denominator as f64
}

impl GramSet<'_> {
    /// Similarity of two gram sets in `[0, 1]`.
    pub fn similarity(&self, other: &GramSet<'_>) -> f64 {
        overlap_score(self.shared_count(other), self.len(), other.len())
    }
}

/// Similarity of two words under `k`-gram decomposition.
///
/// Fails only for `k == 0`.
pub fn similarity(a: &str, b: &str, k: usize) -> Result<f64, NgramError> {
    let k = GramSize::new(k)?;
    Ok(GramSet::new(a, k).similarity(&GramSet::new(b, k)))
}

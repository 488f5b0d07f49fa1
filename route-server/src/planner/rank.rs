//! Candidate ranking.

use super::metrics::ScoredCandidate;

/// Sort candidates ascending by score and keep the best `top_k`.
///
/// The sort is stable, so candidates with equal scores keep their
/// enumeration order. `top_k == 0` yields an empty list; that is a
/// valid request, not an error.
pub fn rank_candidates(
    mut candidates: Vec<ScoredCandidate>,
    top_k: usize,
) -> Vec<ScoredCandidate> {
    candidates.sort_by(|a, b| a.score().total_cmp(&b.score()));
    candidates.truncate(top_k);
    candidates
}

use crate::models::MatchCandidate;

/// Greedily selects the highest-scoring candidates whose document A spans do not overlap.
///
/// ### Ordering:
/// - Candidates are stably sorted by score, descending, so equal scores keep their
///   emission order.
/// - A candidate is accepted only if its `span_a` intersects none of the already
///   accepted `span_a` ranges.
///
/// Note: Document B spans are not checked. Two accepted matches may therefore quote
/// overlapping excerpts of document B.
///
/// ### Example:
/// ```rust
/// use passage_sniffer::{resolve_overlaps, MatchCandidate, TextSpan};
///
/// let candidates = vec![
///     MatchCandidate { span_a: TextSpan::new(0, 10), span_b: TextSpan::new(0, 10), score: 3 },
///     MatchCandidate { span_a: TextSpan::new(5, 20), span_b: TextSpan::new(30, 40), score: 7 },
///     MatchCandidate { span_a: TextSpan::new(21, 30), span_b: TextSpan::new(0, 10), score: 5 },
/// ];
///
/// let resolved = resolve_overlaps(candidates);
///
/// let scores: Vec<usize> = resolved.iter().map(|candidate| candidate.score).collect();
/// assert_eq!(scores, vec![7, 5]);
/// ```
pub fn resolve_overlaps(mut candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    let mut accepted: Vec<MatchCandidate> = Vec::new();

    for candidate in candidates {
        let is_overlapping = accepted
            .iter()
            .any(|unique| unique.span_a.overlaps(&candidate.span_a));

        if !is_overlapping {
            accepted.push(candidate);
        }
    }

    accepted
}

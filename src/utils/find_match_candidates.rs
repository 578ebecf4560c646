use crate::models::{DocumentProfile, MatchCandidate};
use crate::types::{FilteredTokenIndex, OverlapScore};
use crate::utils::collect_indexed;
use crate::PassageSnifferConfig;

/// Total number of neighborhood comparisons `find_match_candidates` would perform.
pub fn count_comparisons(document_a: &DocumentProfile, document_b: &DocumentProfile) -> usize {
    document_a
        .tokens
        .iter()
        .map(|token| document_b.vocabulary_index.positions(&token.text).len())
        .sum()
}

/// Finds the document B token whose neighborhood best overlaps that of document A's
/// token at `index_a`.
///
/// Ties keep the first position found, i.e. the lowest position in document B's list.
pub fn best_counterpart(
    document_a: &DocumentProfile,
    document_b: &DocumentProfile,
    index_a: FilteredTokenIndex,
) -> Option<(FilteredTokenIndex, OverlapScore)> {
    let anchor = &document_a.tokens[index_a];
    let neighborhood = &document_a.neighborhoods[index_a];

    let mut best: Option<(FilteredTokenIndex, OverlapScore)> = None;

    for &index_b in document_b.vocabulary_index.positions(&anchor.text) {
        let overlap = neighborhood.overlap(&document_b.neighborhoods[index_b]);

        if best.map_or(true, |(_, best_overlap)| overlap > best_overlap) {
            best = Some((index_b, overlap));
        }
    }

    best
}

/// Whether an overlap of `score` words clears the cutoff for a window of `window_size`
/// positions. The anchor itself counts as one shared word.
pub fn meets_cutoff(score: OverlapScore, window_size: usize, similarity_cutoff: f64) -> bool {
    (score + 1) as f64 / window_size as f64 >= similarity_cutoff
}

/// Pairs every document A token with its best document B counterpart, keeping those
/// where `(overlap + 1) / (2 * window_radius + 1) >= similarity_cutoff`.
///
/// Candidates are emitted in document A list order.
pub fn find_match_candidates(
    document_a: &DocumentProfile,
    document_b: &DocumentProfile,
    config: &PassageSnifferConfig,
) -> Vec<MatchCandidate> {
    let window_size = config.window_size();

    collect_indexed(document_a.tokens.len(), config.parallel, |index_a| {
        let (index_b, score) = best_counterpart(document_a, document_b, index_a)?;

        if !meets_cutoff(score, window_size, config.similarity_cutoff) {
            return None;
        }

        Some(MatchCandidate {
            span_a: document_a.neighborhoods[index_a].span,
            span_b: document_b.neighborhoods[index_b].span,
            score,
        })
    })
    .into_iter()
    .flatten()
    .collect()
}

use crate::models::TextSpan;
use crate::types::{OverlapScore, Similarity};

/// A pairing of a document A neighborhood with its best document B counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate {
    pub span_a: TextSpan,
    pub span_b: TextSpan,
    pub score: OverlapScore,
}

impl MatchCandidate {
    /// Common words including the anchor itself.
    pub fn similarity(&self) -> Similarity {
        self.score + 1
    }
}

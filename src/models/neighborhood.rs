use crate::models::TextSpan;
use crate::types::{OverlapScore, WordText};
use std::collections::HashSet;

/// The distinct words surrounding an anchor token, and the original-text span they cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    /// Never contains the anchor's own text.
    pub words: HashSet<WordText>,
    /// Covers the anchor plus every neighbor found inside its window.
    pub span: TextSpan,
}

impl Neighborhood {
    /// Number of words both neighborhoods share.
    pub fn overlap(&self, other: &Neighborhood) -> OverlapScore {
        let (smaller, larger) = if self.words.len() <= other.words.len() {
            (&self.words, &other.words)
        } else {
            (&other.words, &self.words)
        };

        smaller.iter().filter(|word| larger.contains(*word)).count()
    }
}

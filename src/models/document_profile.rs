use crate::models::{Neighborhood, Token, VocabularyIndex};
use crate::types::SharedVocabulary;
use crate::utils::{build_neighborhoods, retain_shared_vocabulary};

/// Everything the matcher needs to know about one document, after vocabulary filtering.
///
/// `tokens`, `neighborhoods` are aligned: `neighborhoods[i]` belongs to `tokens[i]`.
#[derive(Debug, Clone)]
pub struct DocumentProfile {
    pub tokens: Vec<Token>,
    pub neighborhoods: Vec<Neighborhood>,
    pub vocabulary_index: VocabularyIndex,
    /// Token count before filtering.
    pub num_of_words: usize,
}

impl DocumentProfile {
    /// Filters `tokens` down to `vocabulary`, then builds neighborhoods and the index.
    pub fn new(
        tokens: Vec<Token>,
        vocabulary: &SharedVocabulary,
        window_radius: usize,
        parallel: bool,
    ) -> Self {
        let num_of_words = tokens.len();
        let tokens = retain_shared_vocabulary(tokens, vocabulary);
        let vocabulary_index = VocabularyIndex::new(&tokens);
        let neighborhoods = build_neighborhoods(&tokens, num_of_words, window_radius, parallel);

        Self {
            tokens,
            neighborhoods,
            vocabulary_index,
            num_of_words,
        }
    }
}

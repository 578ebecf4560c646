use crate::models::Token;
use crate::types::FilteredTokenIndex;
use std::collections::HashMap;

/// Maps every word of a filtered token list to the list positions bearing it.
///
/// Positions for a word are stored in list order, which keeps "first found wins"
/// tie-breaking in the matcher independent of hash iteration order.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    positions: HashMap<String, Vec<FilteredTokenIndex>>,
}

impl VocabularyIndex {
    pub fn new(tokens: &[Token]) -> Self {
        let mut positions: HashMap<String, Vec<FilteredTokenIndex>> = HashMap::new();

        for (index, token) in tokens.iter().enumerate() {
            positions.entry(token.text.clone()).or_default().push(index);
        }

        Self { positions }
    }

    /// Positions of `word`, in ascending order. Empty if the word is not indexed.
    pub fn positions(&self, word: &str) -> &[FilteredTokenIndex] {
        self.positions
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

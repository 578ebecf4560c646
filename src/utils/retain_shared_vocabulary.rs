use crate::models::Token;
use crate::types::SharedVocabulary;
use std::collections::HashSet;

/// Collects the word texts that occur in both token lists.
pub fn shared_vocabulary(tokens_a: &[Token], tokens_b: &[Token]) -> SharedVocabulary {
    let words_a: HashSet<&str> = tokens_a.iter().map(|token| token.text.as_str()).collect();

    tokens_b
        .iter()
        .filter(|token| words_a.contains(token.text.as_str()))
        .map(|token| token.text.clone())
        .collect()
}

/// Compacts a token list down to the words in `vocabulary`, preserving relative order.
///
/// Note: `sequence_index` is left untouched, so gaps in it mark where words unique to
/// one document were removed.
pub fn retain_shared_vocabulary(tokens: Vec<Token>, vocabulary: &SharedVocabulary) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| vocabulary.contains(&token.text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tokenizer;

    #[test]
    fn test_shared_vocabulary_is_intersection() {
        let tokens_a = Tokenizer::document_parser().tokenize("red green blue green");
        let tokens_b = Tokenizer::document_parser().tokenize("blue yellow red");

        let vocabulary = shared_vocabulary(&tokens_a, &tokens_b);

        let expected: SharedVocabulary = ["red", "blue"].iter().map(|w| w.to_string()).collect();
        assert_eq!(vocabulary, expected);
    }

    #[test]
    fn test_retained_tokens_keep_sequence_indexes() {
        let tokens = Tokenizer::document_parser().tokenize("red green blue green red");
        let vocabulary: SharedVocabulary = ["red", "blue"].iter().map(|w| w.to_string()).collect();

        let retained = retain_shared_vocabulary(tokens, &vocabulary);

        let summary: Vec<(&str, usize)> = retained
            .iter()
            .map(|token| (token.text.as_str(), token.sequence_index))
            .collect();
        assert_eq!(summary, vec![("red", 0), ("blue", 2), ("red", 4)]);
    }
}

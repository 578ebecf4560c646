use crate::models::{Neighborhood, TextSpan, Token};
use crate::types::{FilteredTokenIndex, SequenceIndex};
use crate::utils::collect_indexed;
use std::collections::HashSet;

/// Computes the window of original sequence indexes searched around `sequence_index`.
///
/// The window always spans `2 * window_radius + 1` positions. Near either end of the
/// document it is shifted, not truncated, so it stays inside `0..num_of_words`.
pub fn window_bounds(
    sequence_index: SequenceIndex,
    num_of_words: usize,
    window_radius: usize,
) -> (SequenceIndex, SequenceIndex) {
    let width = window_radius * 2;

    let search_min = if sequence_index < window_radius {
        0
    } else if sequence_index + window_radius >= num_of_words {
        num_of_words.saturating_sub(width + 1)
    } else {
        sequence_index - window_radius
    };

    (search_min, search_min + width)
}

/// Builds the neighborhood of the token at `index` within a filtered token list.
///
/// `num_of_words` is the document's token count *before* filtering.
pub fn build_neighborhood(
    tokens: &[Token],
    index: FilteredTokenIndex,
    num_of_words: usize,
    window_radius: usize,
) -> Neighborhood {
    let anchor = &tokens[index];
    let (search_min, search_max) = window_bounds(anchor.sequence_index, num_of_words, window_radius);

    let mut words = HashSet::new();
    let mut span_start = anchor.start_offset;
    let mut span_end = anchor.end_offset;

    // Walk backward from the previous word
    for neighbor in tokens[..index]
        .iter()
        .rev()
        .take_while(|neighbor| neighbor.sequence_index >= search_min)
    {
        if neighbor.text != anchor.text {
            words.insert(neighbor.text.clone());
        }
        span_start = neighbor.start_offset;
    }

    // Walk forward from the next word
    for neighbor in tokens[index + 1..]
        .iter()
        .take_while(|neighbor| neighbor.sequence_index <= search_max)
    {
        if neighbor.text != anchor.text {
            words.insert(neighbor.text.clone());
        }
        span_end = neighbor.end_offset;
    }

    Neighborhood {
        words,
        span: TextSpan::new(span_start, span_end),
    }
}

/// Builds one neighborhood per token, aligned with `tokens`.
pub fn build_neighborhoods(
    tokens: &[Token],
    num_of_words: usize,
    window_radius: usize,
    parallel: bool,
) -> Vec<Neighborhood> {
    collect_indexed(tokens.len(), parallel, |index| {
        build_neighborhood(tokens, index, num_of_words, window_radius)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SharedVocabulary;
    use crate::utils::retain_shared_vocabulary;
    use crate::Tokenizer;

    fn sorted_words(neighborhood: &Neighborhood) -> Vec<&str> {
        let mut words: Vec<&str> = neighborhood.words.iter().map(String::as_str).collect();
        words.sort();
        words
    }

    #[test]
    fn test_window_bounds_in_the_middle() {
        assert_eq!(window_bounds(10, 30, 8), (2, 18));
    }

    #[test]
    fn test_window_bounds_shift_at_start() {
        assert_eq!(window_bounds(0, 30, 8), (0, 16));
        assert_eq!(window_bounds(7, 30, 8), (0, 16));
        assert_eq!(window_bounds(8, 30, 8), (0, 16));
    }

    #[test]
    fn test_window_bounds_shift_at_end() {
        assert_eq!(window_bounds(29, 30, 8), (13, 29));
        assert_eq!(window_bounds(22, 30, 8), (13, 29));
        assert_eq!(window_bounds(21, 30, 8), (13, 29));
        assert_eq!(window_bounds(20, 30, 8), (12, 28));
    }

    #[test]
    fn test_neighborhood_covers_window() {
        let text = "a b c d e f g";
        let tokens = Tokenizer::document_parser().tokenize(text);

        let neighborhood = build_neighborhood(&tokens, 3, tokens.len(), 2);

        assert_eq!(sorted_words(&neighborhood), vec!["b", "c", "e", "f"]);
        assert_eq!(neighborhood.span.slice(text), Some("b c d e f"));
    }

    #[test]
    fn test_neighborhood_window_is_shifted_near_start() {
        let text = "a b c d e f g";
        let tokens = Tokenizer::document_parser().tokenize(text);

        let neighborhood = build_neighborhood(&tokens, 0, tokens.len(), 2);

        assert_eq!(sorted_words(&neighborhood), vec!["b", "c", "d", "e"]);
        assert_eq!(neighborhood.span.slice(text), Some("a b c d e"));
    }

    #[test]
    fn test_neighborhood_excludes_anchor_text() {
        let text = "echo one echo two echo";
        let tokens = Tokenizer::document_parser().tokenize(text);

        let neighborhood = build_neighborhood(&tokens, 2, tokens.len(), 2);

        assert_eq!(sorted_words(&neighborhood), vec!["one", "two"]);
        // Repeated anchor words still extend the span
        assert_eq!(neighborhood.span.slice(text), Some(text));
    }

    #[test]
    fn test_neighborhood_respects_filtered_gaps() {
        let text = "keep drop drop drop keep keep drop drop drop drop drop keep";
        let tokens = Tokenizer::document_parser().tokenize(text);
        let num_of_words = tokens.len();
        let vocabulary: SharedVocabulary = ["keep"].iter().map(|w| w.to_string()).collect();
        let tokens: Vec<Token> = retain_shared_vocabulary(tokens, &vocabulary)
            .into_iter()
            .enumerate()
            .map(|(i, mut token)| {
                // Make each surviving word distinct so it can be tracked
                token.text = format!("keep{}", i);
                token
            })
            .collect();

        // "keep1" sits at sequence index 4, window [2, 6]
        let neighborhood = build_neighborhood(&tokens, 1, num_of_words, 2);

        assert_eq!(sorted_words(&neighborhood), vec!["keep2"]);
        assert_eq!(neighborhood.span.slice(text), Some("keep keep"));
    }

    #[test]
    fn test_build_neighborhoods_is_aligned_with_tokens() {
        let tokens = Tokenizer::document_parser().tokenize("one two three four five six");

        let neighborhoods = build_neighborhoods(&tokens, tokens.len(), 1, true);

        assert_eq!(neighborhoods.len(), tokens.len());
        for (token, neighborhood) in tokens.iter().zip(&neighborhoods) {
            assert!(!neighborhood.words.contains(&token.text));
            assert!(neighborhood.words.len() <= 2);
        }
    }
}

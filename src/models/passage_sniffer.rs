use crate::models::{DocumentProfile, DocumentSide, SimilarPassage, Token};
use crate::utils::{count_comparisons, find_match_candidates, resolve_overlaps, shared_vocabulary};
use crate::{Error, PassageSnifferConfig, Tokenizer};
use log::{debug, info, warn};

/// Finds locally similar passages between two documents.
///
/// A passage is a window of words centered on a word both documents share. Two
/// passages are similar when enough of the distinct words around their anchors are
/// the same, regardless of word order.
pub struct PassageSniffer {
    config: PassageSnifferConfig,
    tokenizer: Tokenizer,
}

impl PassageSniffer {
    /// Creates a sniffer, rejecting configurations that cannot produce meaningful results.
    pub fn new(config: PassageSnifferConfig) -> Result<Self, Error> {
        config.validate()?;

        let tokenizer = if config.split_on_all_whitespace {
            Tokenizer::whitespace_separated_parser()
        } else {
            Tokenizer::document_parser()
        };

        Ok(Self { config, tokenizer })
    }

    pub fn config(&self) -> &PassageSnifferConfig {
        &self.config
    }

    /// Compares `text_a` against `text_b`.
    ///
    /// Results are ordered by descending similarity. Anchors are taken from `text_a`,
    /// and no two results share any part of `text_a`. An empty vector means no
    /// similarities were found.
    pub fn sniff(&self, text_a: &str, text_b: &str) -> Result<Vec<SimilarPassage>, Error> {
        let window_radius = self.config.window_radius;

        let tokens_a = self.tokenize_checked(text_a, DocumentSide::A)?;
        let tokens_b = self.tokenize_checked(text_b, DocumentSide::B)?;

        let vocabulary = shared_vocabulary(&tokens_a, &tokens_b);
        debug!("Shared vocabulary: {} word(s)", vocabulary.len());

        let document_a =
            DocumentProfile::new(tokens_a, &vocabulary, window_radius, self.config.parallel);
        let document_b =
            DocumentProfile::new(tokens_b, &vocabulary, window_radius, self.config.parallel);
        debug!(
            "Filtered tokens: {} of {} in document A, {} of {} in document B",
            document_a.tokens.len(),
            document_a.num_of_words,
            document_b.tokens.len(),
            document_b.num_of_words
        );

        if let Some(limit) = self.config.max_comparisons {
            let comparisons = count_comparisons(&document_a, &document_b);

            if comparisons > limit {
                warn!(
                    "Refusing to compare documents: {} neighborhood comparisons exceed the limit of {}",
                    comparisons, limit
                );
                return Err(Error::ComparisonLimitExceeded { comparisons, limit });
            }
        }

        let candidates = find_match_candidates(&document_a, &document_b, &self.config);
        debug!("Match candidates: {}", candidates.len());

        let resolved = resolve_overlaps(candidates);
        info!("Found {} similar passage(s)", resolved.len());

        resolved
            .iter()
            .map(|candidate| SimilarPassage::from_candidate(candidate, text_a, text_b))
            .collect()
    }

    fn tokenize_checked(&self, text: &str, document: DocumentSide) -> Result<Vec<Token>, Error> {
        let tokens = self.tokenizer.tokenize(text);
        debug!("Tokenized {}: {} word(s)", document, tokens.len());

        if tokens.len() <= self.config.min_exclusive_word_count() {
            return Err(Error::InputTooShort {
                document,
                token_count: tokens.len(),
                window_radius: self.config.window_radius,
            });
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_words(prefix: &str, count: usize) -> String {
        (0..count)
            .map(|i| format!("{}{}", prefix, i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = PassageSnifferConfig {
            window_radius: 0,
            ..Default::default()
        };

        assert!(matches!(
            PassageSniffer::new(config),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_document_a_checked_first() {
        let sniffer = PassageSniffer::new(PassageSnifferConfig::default()).unwrap();

        let result = sniffer.sniff("too short", "also short");

        assert_eq!(
            result,
            Err(Error::InputTooShort {
                document: DocumentSide::A,
                token_count: 2,
                window_radius: 8
            })
        );
    }

    #[test]
    fn test_short_document_b_is_named() {
        let sniffer = PassageSniffer::new(PassageSnifferConfig::default()).unwrap();

        let result = sniffer.sniff(&numbered_words("w", 17), "short");

        assert!(matches!(
            result,
            Err(Error::InputTooShort {
                document: DocumentSide::B,
                ..
            })
        ));
    }

    #[test]
    fn test_comparison_guard() {
        let config = PassageSnifferConfig {
            max_comparisons: Some(10),
            ..Default::default()
        };
        let sniffer = PassageSniffer::new(config).unwrap();
        let text = numbered_words("w", 20);

        let result = sniffer.sniff(&text, &text);

        assert_eq!(
            result,
            Err(Error::ComparisonLimitExceeded {
                comparisons: 20,
                limit: 10
            })
        );
    }

    #[test]
    fn test_guard_disabled() {
        let config = PassageSnifferConfig {
            max_comparisons: None,
            ..Default::default()
        };
        let sniffer = PassageSniffer::new(config).unwrap();
        let text = vec!["same"; 40].join(" ");

        let passages = sniffer.sniff(&text, &text).unwrap();

        // A repeated word has an empty neighborhood, so it only matches itself
        assert!(passages.is_empty());
    }

    #[test]
    fn test_whitespace_separated_config() {
        let config = PassageSnifferConfig {
            split_on_all_whitespace: true,
            ..Default::default()
        };
        let sniffer = PassageSniffer::new(config).unwrap();
        let text = (0..20)
            .map(|i| format!("w{}", i))
            .collect::<Vec<_>>()
            .join("\t");

        let passages = sniffer.sniff(&text, &text).unwrap();

        assert_eq!(passages[0].similarity, 17);
    }
}

mod constants;
pub use constants::DEFAULT_PASSAGE_SNIFFER_CONFIG;
pub mod models;
pub use models::{
    DocumentProfile, DocumentSide, Error, MatchCandidate, Neighborhood, PassageSniffer,
    PassageSnifferConfig, SimilarPassage, TextSpan, Token, Tokenizer, VocabularyIndex,
};
#[cfg(feature = "report")]
pub mod report;
pub mod types;
mod utils;
pub use utils::{
    build_neighborhoods, find_match_candidates, resolve_overlaps, retain_shared_vocabulary,
    shared_vocabulary, window_bounds,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Extracts similar passages from two text documents using the default configuration.
///
/// Returns an empty vector when the documents share no similar passages, and
/// `Error::InputTooShort` when either document has too few words to analyze.
pub fn extract_similar_passages(text_a: &str, text_b: &str) -> Result<Vec<SimilarPassage>, Error> {
    extract_similar_passages_with_custom_config(text_a, text_b, DEFAULT_PASSAGE_SNIFFER_CONFIG)
}

pub fn extract_similar_passages_with_custom_config(
    text_a: &str,
    text_b: &str,
    config: PassageSnifferConfig,
) -> Result<Vec<SimilarPassage>, Error> {
    let sniffer = PassageSniffer::new(config)?;

    sniffer.sniff(text_a, text_b)
}

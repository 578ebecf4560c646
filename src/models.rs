pub mod config;
pub use config::PassageSnifferConfig;

pub mod document_profile;
pub use document_profile::DocumentProfile;

pub mod document_side;
pub use document_side::DocumentSide;

pub mod error;
pub use error::Error;

pub mod match_candidate;
pub use match_candidate::MatchCandidate;

pub mod neighborhood;
pub use neighborhood::Neighborhood;

pub mod passage_sniffer;
pub use passage_sniffer::PassageSniffer;

pub mod similar_passage;
pub use similar_passage::SimilarPassage;

pub mod text_span;
pub use text_span::TextSpan;

pub mod token;
pub use token::Token;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod vocabulary_index;
pub use vocabulary_index::VocabularyIndex;

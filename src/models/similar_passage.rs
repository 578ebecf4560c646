use crate::models::{DocumentSide, MatchCandidate, TextSpan};
use crate::types::Similarity;
use crate::Error;

#[cfg(feature = "report")]
use serde::Serialize;

/// A pair of similar passages, quoted verbatim from both documents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "report", derive(Serialize))]
pub struct SimilarPassage {
    /// Number of common words between both passages, anchor word included.
    pub similarity: Similarity,
    pub text_a: String,
    pub text_b: String,
    pub span_a: TextSpan,
    pub span_b: TextSpan,
}

impl SimilarPassage {
    pub fn from_candidate(
        candidate: &MatchCandidate,
        text_a: &str,
        text_b: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            similarity: candidate.similarity(),
            text_a: slice_span(text_a, candidate.span_a, DocumentSide::A)?.to_string(),
            text_b: slice_span(text_b, candidate.span_b, DocumentSide::B)?.to_string(),
            span_a: candidate.span_a,
            span_b: candidate.span_b,
        })
    }
}

fn slice_span(text: &str, span: TextSpan, document: DocumentSide) -> Result<&str, Error> {
    span.slice(text).ok_or(Error::SpanOutOfBounds {
        document,
        start: span.start,
        end: span.end,
    })
}

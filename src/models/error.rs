use crate::models::DocumentSide;
use crate::types::CharOffset;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The document did not yield more than `2 * window_radius` tokens.
    InputTooShort {
        document: DocumentSide,
        token_count: usize,
        window_radius: usize,
    },
    InvalidConfig(String),
    /// The candidate matcher would have performed more neighborhood comparisons than allowed.
    ComparisonLimitExceeded { comparisons: usize, limit: usize },
    SpanOutOfBounds {
        document: DocumentSide,
        start: CharOffset,
        end: CharOffset,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputTooShort {
                document,
                token_count,
                window_radius,
            } => write!(
                f,
                "Input Too Short: {} has {} word(s); more than {} are required",
                document,
                token_count,
                window_radius * 2
            ),
            Error::InvalidConfig(msg) => write!(f, "Invalid Config: {}", msg),
            Error::ComparisonLimitExceeded { comparisons, limit } => write!(
                f,
                "Comparison Limit Exceeded: {} neighborhood comparisons required, limit is {}",
                comparisons, limit
            ),
            Error::SpanOutOfBounds {
                document,
                start,
                end,
            } => write!(
                f,
                "Span Out Of Bounds: {}..={} is not a valid range of {}",
                start, end, document
            ),
        }
    }
}

impl std::error::Error for Error {}

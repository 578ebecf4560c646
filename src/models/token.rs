use crate::models::TextSpan;
use crate::types::{CharOffset, SequenceIndex, WordText};

/// A single normalized word along with where it came from in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: WordText,
    /// Offset of the first retained character of the word (inclusive).
    pub start_offset: CharOffset,
    /// Offset of the last byte of the last retained character of the word (inclusive).
    pub end_offset: CharOffset,
    /// Position among all tokens of the document, before vocabulary filtering.
    pub sequence_index: SequenceIndex,
}

impl Token {
    pub fn new(
        text: WordText,
        start_offset: CharOffset,
        end_offset: CharOffset,
        sequence_index: SequenceIndex,
    ) -> Self {
        Self {
            text,
            start_offset,
            end_offset,
            sequence_index,
        }
    }

    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.start_offset, self.end_offset)
    }
}

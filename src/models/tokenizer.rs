use crate::models::Token;
use crate::types::CharOffset;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    /// Spaces and line breaks always separate words. When set, any other Unicode
    /// whitespace does too.
    pub all_whitespace_as_spaces: bool,
}

impl Tokenizer {
    /// Configuration for plain text documents.
    ///
    /// Only spaces and line breaks separate words; every other non-alphanumeric
    /// character (tabs included) is dropped without splitting the word it sits in.
    pub fn document_parser() -> Self {
        Self {
            all_whitespace_as_spaces: false,
        }
    }

    /// Configuration that splits on any Unicode whitespace (tabs, NBSP, form feeds, ...).
    pub fn whitespace_separated_parser() -> Self {
        Self {
            all_whitespace_as_spaces: true,
        }
    }

    /// Splits the text into lowercased, alphanumeric-only word tokens.
    ///
    /// Every token remembers the byte offsets of its first and last retained
    /// characters in `text`, so the original wording can be sliced back out.
    ///
    /// Note: If no word survives normalization, a single empty token is returned so
    /// the document is reported as too short rather than silently matching nothing.
    pub fn tokenize(self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut word = String::new();
        let mut word_bounds: Option<(CharOffset, CharOffset)> = None;

        for (offset, c) in text.char_indices() {
            if self.is_separator(c) {
                Self::flush_word(&mut tokens, &mut word, &mut word_bounds);
                continue;
            }

            let mut retained = false;
            for lower in c.to_lowercase().filter(|lower| lower.is_alphanumeric()) {
                word.push(lower);
                retained = true;
            }

            if retained {
                let end = offset + c.len_utf8() - 1;
                word_bounds = Some(word_bounds.map_or((offset, end), |(start, _)| (start, end)));
            }
        }

        Self::flush_word(&mut tokens, &mut word, &mut word_bounds);

        if tokens.is_empty() {
            tokens.push(Token::new(String::new(), 0, 0, 0));
        }

        tokens
    }

    fn is_separator(self, c: char) -> bool {
        matches!(c, ' ' | '\n' | '\r') || (self.all_whitespace_as_spaces && c.is_whitespace())
    }

    fn flush_word(
        tokens: &mut Vec<Token>,
        word: &mut String,
        word_bounds: &mut Option<(CharOffset, CharOffset)>,
    ) {
        if let Some((start, end)) = word_bounds.take() {
            let sequence_index = tokens.len();
            tokens.push(Token::new(std::mem::take(word), start, end, sequence_index));
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::document_parser()
    }
}

use std::collections::HashSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// A normalized word: lowercased, with every non-alphanumeric character removed.
pub type WordText = String;

/// A byte offset into the original, unfiltered document text.
///
/// Offsets always fall on `char` boundaries for start positions and on the last byte
/// of a `char` for (inclusive) end positions.
pub type CharOffset = usize;

/// The 0-based rank of a token among all tokens of its document, assigned before any
/// vocabulary filtering takes place.
pub type SequenceIndex = usize;

/// A position within a document's filtered (shared-vocabulary) token list.
pub type FilteredTokenIndex = usize;

/// Number of neighborhood words two anchors have in common, excluding the anchors.
pub type OverlapScore = usize;

/// Number of common words reported for a similar passage (overlap plus the anchor).
pub type Similarity = usize;

/// The set of word texts occurring in both documents.
pub type SharedVocabulary = HashSet<WordText>;

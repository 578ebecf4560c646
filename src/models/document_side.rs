use std::fmt;

/// Identifies which of the two compared documents something refers to.
///
/// Document `A` is the one anchors are taken from; document `B` is searched for
/// their best counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentSide {
    A,
    B,
}

impl DocumentSide {
    /// 1-based ordinal, as used when documents are referred to as "file 1" and "file 2".
    pub fn ordinal(self) -> usize {
        match self {
            DocumentSide::A => 1,
            DocumentSide::B => 2,
        }
    }
}

impl fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSide::A => write!(f, "document A"),
            DocumentSide::B => write!(f, "document B"),
        }
    }
}

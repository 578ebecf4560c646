use crate::types::CharOffset;

#[cfg(feature = "report")]
use serde::Serialize;

/// An inclusive range of byte offsets into a document's original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "report", derive(Serialize))]
pub struct TextSpan {
    pub start: CharOffset,
    pub end: CharOffset,
}

impl TextSpan {
    pub fn new(start: CharOffset, end: CharOffset) -> Self {
        debug_assert!(start <= end, "span start must not exceed its end");
        Self { start, end }
    }

    /// Inclusive-interval intersection test.
    pub fn overlaps(&self, other: &TextSpan) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Borrows the covered text, or `None` if the span does not describe a valid
    /// range of `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..=self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_endpoints_overlap() {
        let a = TextSpan::new(0, 10);
        let b = TextSpan::new(10, 20);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_spans_do_not_overlap() {
        let a = TextSpan::new(0, 9);
        let b = TextSpan::new(10, 20);

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contained_span_overlaps() {
        let outer = TextSpan::new(0, 100);
        let inner = TextSpan::new(40, 50);

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_slice_is_inclusive() {
        let text = "hello world";

        assert_eq!(TextSpan::new(6, 10).slice(text), Some("world"));
        assert_eq!(TextSpan::new(6, 11).slice(text), None);
    }
}

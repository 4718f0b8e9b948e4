//! Span and byte offset types for source positions.

use text_size::{TextRange, TextSize};

/// A byte offset into a source string.
pub type ByteOffset = TextSize;

/// A span representing a range in source code.
///
/// Spans are half-open intervals `[start, end)` represented as byte offsets.
/// A zero-width span stands for a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// The start byte offset (inclusive).
    pub start: ByteOffset,
    /// The end byte offset (exclusive).
    pub end: ByteOffset,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: impl Into<ByteOffset>, end: impl Into<ByteOffset>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Creates a span from a start offset and a length.
    #[inline]
    pub fn at(start: impl Into<ByteOffset>, len: impl Into<TextSize>) -> Self {
        let start = start.into();
        Self {
            start,
            end: start + len.into(),
        }
    }

    /// Creates an empty span at the given offset.
    #[inline]
    pub fn empty(offset: impl Into<ByteOffset>) -> Self {
        let offset = offset.into();
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the length of this span in bytes.
    #[inline]
    pub fn len(&self) -> TextSize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span contains the given offset.
    #[inline]
    pub fn contains(&self, offset: ByteOffset) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns true if this span contains the given span entirely.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns true if `other` lies inside this span.
    ///
    /// An empty `other` is a caret: it is covered when it sits before one of
    /// this span's characters, so a caret on the end boundary is not covered.
    #[inline]
    pub fn covers(&self, other: Span) -> bool {
        if other.is_empty() {
            self.contains(other.start)
        } else {
            self.contains_span(other)
        }
    }

    /// Returns this span as a `usize` range for slicing source text.
    #[inline]
    pub fn as_range(self) -> std::ops::Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }
}

impl From<TextRange> for Span {
    fn from(range: TextRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
        }
    }
}

impl From<Span> for TextRange {
    fn from(span: Span) -> Self {
        TextRange::new(span.start, span.end)
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(
            TextSize::from(range.start as u32),
            TextSize::from(range.end as u32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(0u32, 10u32);
        assert_eq!(span.start, TextSize::from(0));
        assert_eq!(span.end, TextSize::from(10));
    }

    #[test]
    fn test_span_at() {
        let span = Span::at(4u32, 3u32);
        assert_eq!(span, Span::new(4u32, 7u32));
        assert_eq!(span.len(), TextSize::from(3));
    }

    #[test]
    fn test_span_empty() {
        let span = Span::empty(5u32);
        assert!(span.is_empty());
        assert_eq!(span.len(), TextSize::from(0));
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5u32, 15u32);
        assert!(!span.contains(TextSize::from(4)));
        assert!(span.contains(TextSize::from(5)));
        assert!(span.contains(TextSize::from(10)));
        assert!(!span.contains(TextSize::from(15)));
    }

    #[test]
    fn test_span_covers_caret() {
        let span = Span::new(5u32, 10u32);
        assert!(span.covers(Span::empty(5u32)));
        assert!(span.covers(Span::empty(9u32)));
        // The end boundary belongs to whatever follows.
        assert!(!span.covers(Span::empty(10u32)));
    }

    #[test]
    fn test_span_covers_selection() {
        let span = Span::new(5u32, 10u32);
        assert!(span.covers(Span::new(5u32, 10u32)));
        assert!(span.covers(Span::new(6u32, 8u32)));
        assert!(!span.covers(Span::new(4u32, 8u32)));
        assert!(!span.covers(Span::new(8u32, 11u32)));
    }

    #[test]
    fn test_span_range_conversions() {
        let span = Span::from(3usize..8);
        assert_eq!(span.as_range(), 3..8);
        assert_eq!(&"hello world"[span.as_range()], "lo wo");
        assert_eq!(
            TextRange::from(span),
            TextRange::new(TextSize::from(3), TextSize::from(8))
        );
    }
}

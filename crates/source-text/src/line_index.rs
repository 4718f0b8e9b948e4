//! Conversion between caret offsets and editor line/column coordinates.
//!
//! Columns count bytes, the same unit the lexer uses for spans.

use crate::ByteOffset;
use text_size::TextSize;

/// A line and column position (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed byte column within the line.
    pub col: u32,
}

impl LineCol {
    #[inline]
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Creates a position from 1-indexed editor coordinates.
    ///
    /// Returns `None` when either coordinate is zero.
    pub fn from_one_based(line: u32, col: u32) -> Option<Self> {
        Some(Self {
            line: line.checked_sub(1)?,
            col: col.checked_sub(1)?,
        })
    }
}

/// Line start offsets of a document.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<ByteOffset>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let line_starts = std::iter::once(TextSize::from(0))
            .chain(
                text.match_indices('\n')
                    .map(|(offset, _)| TextSize::from(offset as u32 + 1)),
            )
            .collect();

        Self {
            line_starts,
            len: TextSize::from(text.len() as u32),
        }
    }

    /// Returns the position of `offset`, or `None` past the end of the text.
    pub fn line_col(&self, offset: ByteOffset) -> Option<LineCol> {
        if offset > self.len {
            return None;
        }

        // Index of the last line starting at or before `offset`.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let col = offset - self.line_starts[line];

        Some(LineCol::new(line as u32, col.into()))
    }

    /// Returns the offset of `line_col`.
    ///
    /// A column one past the last character of the line (the caret before the
    /// line break) is accepted; anything further is `None`.
    pub fn offset(&self, line_col: LineCol) -> Option<ByteOffset> {
        let (start, end) = self.line_bounds(line_col.line as usize)?;
        let offset = start + TextSize::from(line_col.col);
        (offset <= end).then_some(offset)
    }

    /// Start and end of a line, the line break excluded.
    fn line_bounds(&self, line: usize) -> Option<(ByteOffset, ByteOffset)> {
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(&next) => next - TextSize::from(1),
            None => self.len,
        };
        Some((start, end))
    }
}

//! Single-span text edits.
//!
//! A [`TextEdit`] replaces one span of the original text with new text. Hosts
//! apply it to a snapshot of their buffer; nothing here mutates in place.

use crate::Span;
use thiserror::Error;

/// An error raised when an edit does not fit the text it is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The span reaches past the end of the text.
    #[error("edit span {start}..{end} is out of bounds for text of length {len}")]
    OutOfBounds {
        /// Start of the offending span.
        start: u32,
        /// End of the offending span.
        end: u32,
        /// Length of the text.
        len: u32,
    },

    /// The span splits a multi-byte character.
    #[error("edit span boundary {offset} is not on a character boundary")]
    NotCharBoundary {
        /// The offending offset.
        offset: u32,
    },

    /// The span ends before it starts.
    #[error("edit span {start}..{end} is inverted")]
    Inverted {
        /// Start of the offending span.
        start: u32,
        /// End of the offending span.
        end: u32,
    },
}

/// A replacement of one span of text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextEdit {
    /// The span of the original text being replaced.
    pub span: Span,
    /// The text that takes its place.
    pub new_text: String,
}

impl TextEdit {
    /// Creates an edit replacing `span` with `new_text`.
    pub fn replace(span: Span, new_text: impl Into<String>) -> Self {
        Self {
            span,
            new_text: new_text.into(),
        }
    }

    /// Checks that the edit can be applied to `text`.
    fn validate(&self, text: &str) -> Result<(), EditError> {
        let start = u32::from(self.span.start);
        let end = u32::from(self.span.end);

        if start > end {
            return Err(EditError::Inverted { start, end });
        }
        if end as usize > text.len() {
            return Err(EditError::OutOfBounds {
                start,
                end,
                len: text.len() as u32,
            });
        }
        for offset in [start, end] {
            if !text.is_char_boundary(offset as usize) {
                return Err(EditError::NotCharBoundary { offset });
            }
        }

        Ok(())
    }

    /// Applies the edit to `text`, returning the new text.
    pub fn apply(&self, text: &str) -> Result<String, EditError> {
        self.validate(text)?;

        let range = self.span.as_range();
        let mut result = String::with_capacity(text.len() - range.len() + self.new_text.len());
        result.push_str(&text[..range.start]);
        result.push_str(&self.new_text);
        result.push_str(&text[range.end..]);
        Ok(result)
    }
}

//! Source position tracking and text edits for add-interpolation.
//!
//! This crate provides the position vocabulary shared by the lexer, the
//! refactoring and the command-line front end: byte offsets, half-open spans,
//! a line index for caret conversion, and single-span text edits that a
//! document host applies to produce a new snapshot.

mod edit;
mod line_index;
mod span;

pub use edit::{EditError, TextEdit};
pub use line_index::{LineCol, LineIndex};
pub use span::{ByteOffset, Span};

//! Parse error types.

use source_text::Span;
use thiserror::Error;

/// An error that occurred while building the token stream.
///
/// Errors never stop the parse; the offending token stays in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The location in the source where the error occurred.
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A string literal reached the end of its line (or file) without a closing quote.
    #[error("unterminated {literal}")]
    UnterminatedString {
        /// The kind of literal, as a readable name.
        literal: &'static str,
    },

    /// A character literal is missing its closing quote.
    #[error("unterminated character literal")]
    UnterminatedCharLiteral,

    /// A block comment is missing its closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// A character that cannot start any token.
    #[error("unexpected character: {found}")]
    UnexpectedCharacter {
        /// The text that could not be lexed.
        found: String,
    },
}

//! Refactoring error types.

use thiserror::Error;

/// An error that aborts a single add-interpolation edit.
///
/// Neither variant is a user-facing condition: a literal that cannot be found
/// at the caret is reported as an absent action, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefactorError {
    /// The token handed to the transformer is not a plain or verbatim string literal.
    #[error("invalid literal kind: expected a string literal starting with `\"` or `@\"`, found `{text}`")]
    InvalidLiteralKind {
        /// The raw text of the offending token.
        text: String,
    },

    /// The computed replacement does not have the length it must have.
    #[error("internal invariant violation: expected {expected} bytes, produced {actual}")]
    InternalInvariantViolation {
        /// The length the replacement must have.
        expected: usize,
        /// The length actually produced.
        actual: usize,
    },
}

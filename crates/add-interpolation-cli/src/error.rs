//! CLI error types.

use add_interpolation::RefactorError;
use camino::Utf8PathBuf;
use miette::Diagnostic;
use source_text::EditError;
use thiserror::Error;

/// An error that stops a run.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// The source file could not be read or written.
    #[error("failed to {action} {path}")]
    #[diagnostic(code(add_interpolation::io))]
    Io {
        /// `read` or `write`.
        action: &'static str,
        /// The file involved.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The requested caret or selection does not exist in the file.
    #[error("invalid position: {message}")]
    #[diagnostic(
        code(add_interpolation::position),
        help("offsets are byte offsets; lines and columns start at 1")
    )]
    InvalidPosition {
        /// What is wrong with the position.
        message: String,
    },

    /// The refactoring could not compute a replacement.
    #[error(transparent)]
    #[diagnostic(code(add_interpolation::refactor))]
    Refactor(#[from] RefactorError),

    /// The replacement could not be applied to the file.
    #[error(transparent)]
    #[diagnostic(code(add_interpolation::edit))]
    Edit(#[from] EditError),

    /// The JSON output could not be produced.
    #[error("failed to serialize output")]
    #[diagnostic(code(add_interpolation::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Creates an [`CliError::InvalidPosition`].
    pub fn position(message: impl Into<String>) -> Self {
        Self::InvalidPosition {
            message: message.into(),
        }
    }
}

//! Rewrites a string literal as an interpolated string.
//!
//! The rewrite only changes the literal's opening delimiter. The payload is
//! copied byte-for-byte, so escape sequences, doubled quotes and braces keep
//! their spelling, and a literal without a closing quote stays that way.

use crate::error::RefactorError;
use crate::literal::StringLiteralToken;
use std::fmt;

/// The opening delimiter of an interpolated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMarker {
    /// `$"`
    Regular,
    /// `$@"`
    Verbatim,
}

impl StartMarker {
    /// Returns the delimiter's source text.
    pub fn text(self) -> &'static str {
        match self {
            StartMarker::Regular => "$\"",
            StartMarker::Verbatim => "$@\"",
        }
    }
}

/// The closing delimiter of an interpolated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndMarker {
    /// A closing `"`.
    Quote,
    /// The literal was never closed.
    Missing,
}

impl EndMarker {
    /// Returns the delimiter's source text, empty when missing.
    pub fn text(self) -> &'static str {
        match self {
            EndMarker::Quote => "\"",
            EndMarker::Missing => "",
        }
    }
}

/// The payload of an interpolated string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentToken {
    /// The payload exactly as spelled in the source.
    pub text: String,
    /// The decoded value of the payload.
    pub value: String,
}

/// An interpolated string literal with its trivia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpolatedLiteral {
    /// Trivia carried over from the original literal.
    pub leading_trivia: String,
    /// `$"` or `$@"`.
    pub start: StartMarker,
    /// The payload between the delimiters.
    pub content: ContentToken,
    /// `"` or nothing.
    pub end: EndMarker,
    /// Trivia carried over from the original literal.
    pub trailing_trivia: String,
}

impl InterpolatedLiteral {
    /// Returns the token text, trivia excluded.
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Returns the token text with its leading and trailing trivia.
    pub fn full_text(&self) -> String {
        format!("{}{}{}", self.leading_trivia, self.text(), self.trailing_trivia)
    }

    /// Returns true for `$@"..."` strings.
    pub fn is_verbatim(&self) -> bool {
        self.start == StartMarker::Verbatim
    }

    /// Returns true if the string ends with a closing quote.
    pub fn has_end_quote(&self) -> bool {
        self.end == EndMarker::Quote
    }
}

impl fmt::Display for InterpolatedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.start.text())?;
        f.write_str(&self.content.text)?;
        f.write_str(self.end.text())
    }
}

/// Converts a string literal into the equivalent interpolated string.
///
/// The result is always exactly one byte longer than the literal: only a `$`
/// is added.
pub fn transform(token: &StringLiteralToken) -> Result<InterpolatedLiteral, RefactorError> {
    let raw = token.raw_text();
    let form = token.form();

    let start = if form.is_verbatim {
        StartMarker::Verbatim
    } else {
        StartMarker::Regular
    };
    let end = if form.has_end_quote {
        EndMarker::Quote
    } else {
        EndMarker::Missing
    };

    // The original opening delimiter is the new one minus its `$`.
    let skip_front = start.text().len() - 1;
    let skip_back = end.text().len();
    let payload = raw
        .len()
        .checked_sub(skip_back)
        .and_then(|payload_end| raw.get(skip_front..payload_end))
        .ok_or_else(|| RefactorError::InvalidLiteralKind {
            text: raw.to_string(),
        })?;

    let result = InterpolatedLiteral {
        leading_trivia: token.leading_trivia().to_string(),
        start,
        content: ContentToken {
            text: payload.to_string(),
            value: token.value_text().to_string(),
        },
        end,
        trailing_trivia: token.trailing_trivia().to_string(),
    };

    check_length(raw, result)
}

/// Rejects a replacement that is not exactly one byte longer than `raw`.
fn check_length(
    raw: &str,
    result: InterpolatedLiteral,
) -> Result<InterpolatedLiteral, RefactorError> {
    let expected = raw.len() + 1;
    let actual = result.text().len();
    if actual != expected {
        return Err(RefactorError::InternalInvariantViolation { expected, actual });
    }

    Ok(result)
}

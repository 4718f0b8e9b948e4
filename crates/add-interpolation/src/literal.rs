//! The string literal token a refactoring operates on.

use crate::error::RefactorError;
use csharp_syntax::SyntaxToken;
use source_text::Span;

/// How a string literal is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralForm {
    /// `@"..."` rather than `"..."`.
    pub is_verbatim: bool,
    /// The literal ends with a closing quote distinct from its opening one.
    pub has_end_quote: bool,
}

impl LiteralForm {
    /// Classifies the raw text of a string literal.
    ///
    /// A verbatim literal whose payload ends in a doubled quote still ends in
    /// `"` and counts as closed. A lone opening delimiter (`"` or `@"`) has no
    /// end quote.
    pub fn classify(raw_text: &str) -> Result<Self, RefactorError> {
        let opening_len = if raw_text.starts_with("@\"") {
            2
        } else if raw_text.starts_with('"') {
            1
        } else {
            return Err(RefactorError::InvalidLiteralKind {
                text: raw_text.to_string(),
            });
        };

        Ok(Self {
            is_verbatim: opening_len == 2,
            has_end_quote: raw_text.len() > opening_len && raw_text.ends_with('"'),
        })
    }
}

/// An immutable snapshot of a string literal token and its surroundings.
///
/// The raw text always begins with `"` or `@"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteralToken {
    raw_text: String,
    value_text: String,
    span: Span,
    leading_trivia: String,
    trailing_trivia: String,
    form: LiteralForm,
}

impl StringLiteralToken {
    /// Creates a literal token from its parts.
    ///
    /// Fails with [`RefactorError::InvalidLiteralKind`] when `raw_text` does
    /// not start with `"` or `@"`.
    pub fn new(
        raw_text: impl Into<String>,
        value_text: impl Into<String>,
        span: Span,
        leading_trivia: impl Into<String>,
        trailing_trivia: impl Into<String>,
    ) -> Result<Self, RefactorError> {
        let raw_text = raw_text.into();
        let form = LiteralForm::classify(&raw_text)?;

        Ok(Self {
            raw_text,
            value_text: value_text.into(),
            span,
            leading_trivia: leading_trivia.into(),
            trailing_trivia: trailing_trivia.into(),
            form,
        })
    }

    /// Captures a string literal token from a token stream.
    pub fn from_syntax(token: &SyntaxToken) -> Result<Self, RefactorError> {
        let value_text = token
            .value_text()
            .ok_or_else(|| RefactorError::InvalidLiteralKind {
                text: token.text.to_string(),
            })?;

        Self::new(
            token.text.as_str(),
            value_text,
            token.span,
            token.leading_text(),
            token.trailing_text(),
        )
    }

    /// The exact source characters, quotes and `@` included.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The decoded value of the literal.
    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    /// The token's span in the source, trivia excluded.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Formatting text attached before the token.
    pub fn leading_trivia(&self) -> &str {
        &self.leading_trivia
    }

    /// Formatting text attached after the token.
    pub fn trailing_trivia(&self) -> &str {
        &self.trailing_trivia
    }

    /// Returns the literal's spelling.
    pub fn form(&self) -> LiteralForm {
        self.form
    }

    /// Returns true for `@"..."` literals.
    pub fn is_verbatim(&self) -> bool {
        self.form.is_verbatim
    }

    /// Returns true if the literal ends with its own closing quote.
    pub fn has_end_quote(&self) -> bool {
        self.form.has_end_quote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csharp_syntax::parse;

    #[test]
    fn test_classify() {
        let form = |raw: &str| LiteralForm::classify(raw).unwrap();
        assert_eq!(
            form("\"\""),
            LiteralForm {
                is_verbatim: false,
                has_end_quote: true
            }
        );
        assert_eq!(
            form("@\"TE\"\"ST\""),
            LiteralForm {
                is_verbatim: true,
                has_end_quote: true
            }
        );
        assert_eq!(
            form("\"TEST"),
            LiteralForm {
                is_verbatim: false,
                has_end_quote: false
            }
        );
        assert_eq!(
            form("@\"TEST"),
            LiteralForm {
                is_verbatim: true,
                has_end_quote: false
            }
        );
    }

    #[test]
    fn test_classify_lone_opening_delimiter() {
        assert!(!LiteralForm::classify("\"").unwrap().has_end_quote);
        assert!(!LiteralForm::classify("@\"").unwrap().has_end_quote);
    }

    #[test]
    fn test_classify_rejects_other_tokens() {
        for raw in ["", "x", "'a'", "$\"a\"", "@x"] {
            assert_eq!(
                LiteralForm::classify(raw),
                Err(RefactorError::InvalidLiteralKind {
                    text: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn test_from_syntax() {
        let result = parse("var x =\n    /* a */ @\"TE\"\"ST\" // b\n;");
        let token = result
            .tree
            .tokens()
            .iter()
            .find(|t| t.is_string_literal())
            .unwrap();

        let literal = StringLiteralToken::from_syntax(token).unwrap();
        assert_eq!(literal.raw_text(), "@\"TE\"\"ST\"");
        assert_eq!(literal.value_text(), "TE\"ST");
        assert_eq!(literal.leading_trivia(), "    /* a */ ");
        assert_eq!(literal.trailing_trivia(), " // b\n");
        assert_eq!(literal.span(), token.span);
        assert!(literal.is_verbatim());
        assert!(literal.has_end_quote());
    }

    #[test]
    fn test_from_syntax_rejects_non_literals() {
        let result = parse("$\"a\"");
        let token = &result.tree.tokens()[0];
        assert!(matches!(
            StringLiteralToken::from_syntax(token),
            Err(RefactorError::InvalidLiteralKind { .. })
        ));
    }
}

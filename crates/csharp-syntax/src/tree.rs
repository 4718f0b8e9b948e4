//! Token stream with attached trivia.

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, TokenKind};
use crate::literal;
use smol_str::SmolStr;
use source_text::{ByteOffset, Span};

/// A piece of formatting-only text attached to a token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trivia {
    /// Whitespace, newline, comment or directive.
    pub kind: TokenKind,
    /// Where the trivia sits in the source.
    pub span: Span,
    /// The exact source text.
    pub text: SmolStr,
}

/// A token together with its leading and trailing trivia.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntaxToken {
    /// The kind of token.
    pub kind: TokenKind,
    /// The token's own span, trivia excluded.
    pub span: Span,
    /// The exact source text of the token.
    pub text: SmolStr,
    /// Trivia between the previous token's trailing trivia and this token.
    pub leading: Vec<Trivia>,
    /// Trivia after this token, up to and including the end of its line.
    pub trailing: Vec<Trivia>,
}

impl SyntaxToken {
    /// Returns the span including leading and trailing trivia.
    pub fn full_span(&self) -> Span {
        let start = self.leading.first().map_or(self.span.start, |t| t.span.start);
        let end = self.trailing.last().map_or(self.span.end, |t| t.span.end);
        Span::new(start, end)
    }

    /// Returns the concatenated leading trivia text.
    pub fn leading_text(&self) -> String {
        self.leading.iter().map(|t| t.text.as_str()).collect()
    }

    /// Returns the concatenated trailing trivia text.
    pub fn trailing_text(&self) -> String {
        self.trailing.iter().map(|t| t.text.as_str()).collect()
    }

    /// Returns the token text with its trivia, exactly as in the source.
    pub fn full_text(&self) -> String {
        format!("{}{}{}", self.leading_text(), self.text, self.trailing_text())
    }

    /// Returns true for plain and verbatim string literals.
    pub fn is_string_literal(&self) -> bool {
        self.kind.is_string_literal()
    }

    /// Returns the decoded value of a string literal token.
    pub fn value_text(&self) -> Option<String> {
        literal::string_value(self.kind, &self.text)
    }

    /// Returns true if a delimited token found its closing delimiter.
    pub fn is_terminated(&self) -> bool {
        literal::is_terminated(self.kind, &self.text)
    }
}

/// The result of parsing a source file.
#[derive(Debug)]
pub struct ParseResult {
    /// The token stream.
    pub tree: SyntaxTree,
    /// Any errors encountered during lexing.
    pub errors: Vec<ParseError>,
}

/// A lossless token stream over one source text.
///
/// Concatenating the full text of every token reproduces the source exactly.
/// The last token is always [`TokenKind::EndOfFile`], which owns any trivia
/// left at the end of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    source: String,
    tokens: Vec<SyntaxToken>,
}

impl SyntaxTree {
    /// Parses source text into a token stream, collecting errors on the way.
    pub fn parse(source: &str) -> ParseResult {
        let mut tokens: Vec<SyntaxToken> = Vec::new();
        let mut errors = Vec::new();
        let mut pending: Vec<Trivia> = Vec::new();
        let mut in_trailing = false;

        for token in Lexer::new(source) {
            let text = SmolStr::new(&source[token.span.as_range()]);

            if token.kind.is_trivia() {
                if token.kind == TokenKind::BlockComment
                    && !literal::is_terminated(token.kind, &text)
                {
                    errors.push(ParseError::new(
                        ParseErrorKind::UnterminatedComment,
                        token.span,
                    ));
                }

                let is_newline = token.kind == TokenKind::Newline;
                let trivia = Trivia {
                    kind: token.kind,
                    span: token.span,
                    text,
                };
                match tokens.last_mut() {
                    Some(last) if in_trailing => last.trailing.push(trivia),
                    _ => pending.push(trivia),
                }
                if is_newline {
                    in_trailing = false;
                }
                continue;
            }

            if let Some(kind) = error_kind(token.kind, &text) {
                errors.push(ParseError::new(kind, token.span));
            }

            tokens.push(SyntaxToken {
                kind: token.kind,
                span: token.span,
                text,
                leading: std::mem::take(&mut pending),
                trailing: Vec::new(),
            });
            in_trailing = true;
        }

        ParseResult {
            tree: SyntaxTree {
                source: source.to_string(),
                tokens,
            },
            errors,
        }
    }

    /// Returns the source text the tree was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns all tokens, ending with the end-of-file token.
    pub fn tokens(&self) -> &[SyntaxToken] {
        &self.tokens
    }

    /// Finds the token whose own span covers `span`.
    ///
    /// A zero-width span at a boundary between two adjacent tokens resolves to
    /// the token that starts there. A span inside trivia, or one that crosses
    /// a token boundary, covers no token.
    pub fn find_token(&self, span: Span) -> Option<&SyntaxToken> {
        let idx = self.tokens.partition_point(|t| t.span.start <= span.start);
        let token = self.tokens.get(idx.checked_sub(1)?)?;

        if token.kind == TokenKind::EndOfFile || !token.span.covers(span) {
            return None;
        }

        Some(token)
    }

    /// Returns the token whose full span, trivia included, contains `offset`.
    ///
    /// Offsets at the very end of the source resolve to the end-of-file token.
    pub fn token_at(&self, offset: ByteOffset) -> Option<&SyntaxToken> {
        if usize::from(offset) > self.source.len() {
            return None;
        }

        let idx = self
            .tokens
            .partition_point(|t| t.full_span().start <= offset);
        self.tokens.get(idx.checked_sub(1)?)
    }
}

fn error_kind(kind: TokenKind, text: &str) -> Option<ParseErrorKind> {
    match kind {
        TokenKind::Error => Some(ParseErrorKind::UnexpectedCharacter {
            found: text.to_string(),
        }),
        TokenKind::CharLiteral if !literal::is_terminated(kind, text) => {
            Some(ParseErrorKind::UnterminatedCharLiteral)
        }
        TokenKind::StringLiteral
        | TokenKind::VerbatimStringLiteral
        | TokenKind::InterpolatedStringLiteral
        | TokenKind::InterpolatedVerbatimStringLiteral
            if !literal::is_terminated(kind, text) =>
        {
            Some(ParseErrorKind::UnterminatedString {
                literal: kind.name(),
            })
        }
        _ => None,
    }
}

//! C# token stream for add-interpolation.
//!
//! This crate provides just enough of C# lexical structure to drive
//! token-level refactorings:
//! - Lexer (tokenizer) using `logos`, trivia included
//! - A lossless token stream with Roslyn-style leading/trailing trivia
//! - Token lookup by caret or selection span
//! - String literal classification and value decoding
//! - Error recovery for unterminated literals and comments
//!
//! # Example
//!
//! ```
//! use csharp_syntax::{SyntaxTree, Span, TokenKind};
//!
//! let source = r#"var greeting = "hello";"#;
//! let result = SyntaxTree::parse(source);
//! assert!(result.errors.is_empty());
//!
//! let token = result.tree.find_token(Span::empty(17u32)).unwrap();
//! assert_eq!(token.kind, TokenKind::StringLiteral);
//! assert_eq!(token.value_text().as_deref(), Some("hello"));
//! ```

mod error;
mod lexer;
pub mod literal;
mod tree;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, TokenKind};
pub use source_text::Span;
pub use tree::{ParseResult, SyntaxToken, SyntaxTree, Trivia};

/// Parses C# source into a token stream.
///
/// Shorthand for [`SyntaxTree::parse`].
pub fn parse(source: &str) -> ParseResult {
    SyntaxTree::parse(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let result = parse("");
        assert!(result.errors.is_empty());
        assert_eq!(result.tree.tokens().len(), 1);
        assert_eq!(result.tree.tokens()[0].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_parse_method() {
        let source = r#"public static void M()
{
    var x = "TEST";
}"#;
        let result = parse(source);
        assert!(result.errors.is_empty());
        assert_eq!(
            result
                .tree
                .tokens()
                .iter()
                .filter(|t| t.is_string_literal())
                .count(),
            1
        );
    }
}

//! Finds the string literal a caret or selection refers to.

use crate::literal::StringLiteralToken;
use csharp_syntax::{SyntaxToken, SyntaxTree};
use source_text::{ByteOffset, Span};

/// Returns the string literal token at `span`, if any.
///
/// The span must lie inside one literal token. A caret placed directly after
/// the closing quote also resolves to the literal.
pub fn locate_token(tree: &SyntaxTree, span: Span) -> Option<&SyntaxToken> {
    if let Some(token) = tree.find_token(span) {
        if token.is_string_literal() {
            return Some(token);
        }
    }

    if span.start == ByteOffset::from(0) {
        return None;
    }

    let before = Span::empty(span.start - ByteOffset::from(1));
    tree.find_token(before).filter(|token| token.is_string_literal())
}

/// Returns a snapshot of the string literal at `span`, if any.
pub fn locate(tree: &SyntaxTree, span: Span) -> Option<StringLiteralToken> {
    let token = locate_token(tree, span)?;
    StringLiteralToken::from_syntax(token).ok()
}

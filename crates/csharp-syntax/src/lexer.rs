//! C# lexer using logos.
//!
//! The lexer produces every character of the source as some token, trivia
//! included, so that a token stream can be turned back into the exact source:
//! - Trivia (whitespace, newlines, comments, preprocessor lines)
//! - Identifiers, numbers and punctuation
//! - Character, string, verbatim and interpolated string literals
//!
//! Literals that run into the end of a line (or the end of the file, for the
//! verbatim forms) without a closing quote are still produced as literal
//! tokens; whether they were terminated is a property of their text.

use logos::Logos;
use source_text::Span;
use text_size::TextSize;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span of the token in the source.
    pub span: Span,
}

/// Token kinds for C# source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // === Trivia ===
    /// Spaces, tabs, vertical tabs and form feeds.
    #[regex(r"[ \t\x0B\x0C]+")]
    Whitespace,

    /// A line break.
    #[regex(r"\r\n|\n|\r")]
    Newline,

    /// `// ...` up to the end of the line.
    #[token("//", line_comment)]
    LineComment,

    /// `/* ... */`
    #[token("/*", block_comment)]
    BlockComment,

    /// `#region`, `#if` and friends, up to the end of the line.
    #[token("#", line_comment)]
    PreprocessorDirective,

    // === Literals ===
    /// `"..."`
    #[token("\"", regular_string)]
    StringLiteral,

    /// `@"..."`
    #[token("@\"", verbatim_string)]
    VerbatimStringLiteral,

    /// `$"..."`
    #[token("$\"", interpolated_string)]
    InterpolatedStringLiteral,

    /// `$@"..."` or `@$"..."`
    #[token("$@\"", interpolated_verbatim_string)]
    #[token("@$\"", interpolated_verbatim_string)]
    InterpolatedVerbatimStringLiteral,

    /// `'c'`
    #[token("'", char_literal)]
    CharLiteral,

    /// Integer and real literals, including hex, suffixes and separators.
    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9][0-9A-Za-z_]*)?")]
    NumericLiteral,

    // === Names ===
    /// An identifier or keyword, optionally `@`-escaped.
    #[regex(r"@?[\p{L}_][\p{L}\p{N}_]*")]
    Identifier,

    // === Punctuation ===
    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// Any run of operator characters (`=`, `=>`, `+=`, `?.`, `::`, ...).
    #[regex(r"[=<>!+\-*%&|^~?:]+")]
    #[token("/")]
    #[token("/=")]
    Operator,

    /// End of file
    EndOfFile,

    /// Invalid/unknown character
    Error,
}

impl TokenKind {
    /// Returns true for tokens that carry no meaning and attach to neighbours.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
                | TokenKind::PreprocessorDirective
        )
    }

    /// Returns true for plain-quoted and verbatim-quoted string literals.
    ///
    /// Interpolated strings are not string literals in this sense.
    pub fn is_string_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral | TokenKind::VerbatimStringLiteral
        )
    }

    /// Returns true for interpolated string literals of either form.
    pub fn is_interpolated_string(&self) -> bool {
        matches!(
            self,
            TokenKind::InterpolatedStringLiteral | TokenKind::InterpolatedVerbatimStringLiteral
        )
    }

    /// Returns true for the verbatim form of a string or interpolated string.
    pub fn is_verbatim(&self) -> bool {
        matches!(
            self,
            TokenKind::VerbatimStringLiteral | TokenKind::InterpolatedVerbatimStringLiteral
        )
    }

    /// Returns a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::LineComment => "line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::PreprocessorDirective => "preprocessor directive",
            TokenKind::StringLiteral => "string literal",
            TokenKind::VerbatimStringLiteral => "verbatim string literal",
            TokenKind::InterpolatedStringLiteral => "interpolated string",
            TokenKind::InterpolatedVerbatimStringLiteral => "interpolated verbatim string",
            TokenKind::CharLiteral => "character literal",
            TokenKind::NumericLiteral => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Operator => "operator",
            TokenKind::EndOfFile => "end of file",
            TokenKind::Error => "invalid token",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// === Scanners ===
//
// Each scanner looks at the bytes following an opening delimiter and returns
// how many of them belong to the token. They only ever stop on ASCII bytes, so
// the returned length always falls on a char boundary.

/// How far a scanner got and whether it found the closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scan {
    pub(crate) len: usize,
    pub(crate) terminated: bool,
}

impl Scan {
    fn closed(len: usize) -> Self {
        Self {
            len,
            terminated: true,
        }
    }

    fn open(len: usize) -> Self {
        Self {
            len,
            terminated: false,
        }
    }
}

fn is_newline(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

/// Scans a quoted literal with backslash escapes (`"..."` or `'...'`).
///
/// Stops before a line break when the closing quote is missing.
pub(crate) fn scan_quoted(rest: &[u8], quote: u8) -> Scan {
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            b if b == quote => return Scan::closed(i + 1),
            b'\\' => match rest.get(i + 1) {
                Some(&next) if !is_newline(next) => i += 2,
                _ => i += 1,
            },
            b if is_newline(b) => return Scan::open(i),
            _ => i += 1,
        }
    }
    Scan::open(rest.len())
}

/// Scans a verbatim literal body, where `""` is an escaped quote.
///
/// Verbatim literals may span lines; an unterminated one runs to end of file.
pub(crate) fn scan_verbatim(rest: &[u8]) -> Scan {
    let mut i = 0;
    while i < rest.len() {
        if rest[i] == b'"' {
            if rest.get(i + 1) == Some(&b'"') {
                i += 2;
                continue;
            }
            return Scan::closed(i + 1);
        }
        i += 1;
    }
    Scan::open(rest.len())
}

/// Scans an interpolated string body, skipping `{{` escapes and `{...}` holes.
pub(crate) fn scan_interpolated(rest: &[u8], verbatim: bool) -> Scan {
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            b'"' if verbatim && rest.get(i + 1) == Some(&b'"') => i += 2,
            b'"' => return Scan::closed(i + 1),
            b'\\' if !verbatim => match rest.get(i + 1) {
                Some(&next) if !is_newline(next) => i += 2,
                _ => i += 1,
            },
            b if !verbatim && is_newline(b) => return Scan::open(i),
            b'{' if rest.get(i + 1) == Some(&b'{') => i += 2,
            b'{' => i = skip_hole(rest, i + 1, verbatim),
            _ => i += 1,
        }
    }
    Scan::open(rest.len())
}

/// Skips an interpolation hole starting just after its `{`.
///
/// Returns the index just past the matching `}`. Nested literals are skipped
/// whole so that braces and quotes inside them do not count.
fn skip_hole(rest: &[u8], mut i: usize, verbatim: bool) -> usize {
    let mut depth = 0usize;
    while i < rest.len() {
        let tail = &rest[i..];
        match rest[i] {
            b'}' if depth == 0 => return i + 1,
            b'}' => {
                depth -= 1;
                i += 1;
            }
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'"' => i += 1 + scan_quoted(&tail[1..], b'"').len,
            b'\'' => i += 1 + scan_quoted(&tail[1..], b'\'').len,
            b'@' if tail.starts_with(b"@$\"") => i += 3 + scan_interpolated(&tail[3..], true).len,
            b'@' if tail.starts_with(b"@\"") => i += 2 + scan_verbatim(&tail[2..]).len,
            b'$' if tail.starts_with(b"$@\"") => i += 3 + scan_interpolated(&tail[3..], true).len,
            b'$' if tail.starts_with(b"$\"") => i += 2 + scan_interpolated(&tail[2..], false).len,
            b if !verbatim && is_newline(b) => return i,
            _ => i += 1,
        }
    }
    rest.len()
}

/// Scans to the end of the line, leaving the line break out.
fn scan_line(rest: &[u8]) -> usize {
    rest.iter().position(|&b| is_newline(b)).unwrap_or(rest.len())
}

/// Scans a block comment body up to and including `*/`.
pub(crate) fn scan_block_comment(rest: &[u8]) -> Scan {
    match rest.windows(2).position(|w| w == b"*/") {
        Some(pos) => Scan::closed(pos + 2),
        None => Scan::open(rest.len()),
    }
}

fn line_comment(lex: &mut logos::Lexer<TokenKind>) {
    let len = scan_line(lex.remainder().as_bytes());
    lex.bump(len);
}

fn block_comment(lex: &mut logos::Lexer<TokenKind>) {
    let scan = scan_block_comment(lex.remainder().as_bytes());
    lex.bump(scan.len);
}

fn regular_string(lex: &mut logos::Lexer<TokenKind>) {
    let scan = scan_quoted(lex.remainder().as_bytes(), b'"');
    lex.bump(scan.len);
}

fn char_literal(lex: &mut logos::Lexer<TokenKind>) {
    let scan = scan_quoted(lex.remainder().as_bytes(), b'\'');
    lex.bump(scan.len);
}

fn verbatim_string(lex: &mut logos::Lexer<TokenKind>) {
    let scan = scan_verbatim(lex.remainder().as_bytes());
    lex.bump(scan.len);
}

fn interpolated_string(lex: &mut logos::Lexer<TokenKind>) {
    let scan = scan_interpolated(lex.remainder().as_bytes(), false);
    lex.bump(scan.len);
}

fn interpolated_verbatim_string(lex: &mut logos::Lexer<TokenKind>) {
    let scan = scan_interpolated(lex.remainder().as_bytes(), true);
    lex.bump(scan.len);
}

/// A lexer for C# source code.
///
/// Yields every token including trivia, followed by a single
/// [`TokenKind::EndOfFile`] token.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            finished: false,
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let kind = match self.inner.next() {
            Some(Ok(kind)) => kind,
            Some(Err(())) => TokenKind::Error,
            None => {
                self.finished = true;
                let end = TextSize::from(self.inner.source().len() as u32);
                return Some(Token {
                    kind: TokenKind::EndOfFile,
                    span: Span::new(end, end),
                });
            }
        };

        Some(Token {
            kind,
            span: Span::from(self.inner.span()),
        })
    }
}

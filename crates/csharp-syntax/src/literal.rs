//! String literal decoding.
//!
//! Turns the raw spelling of a string literal token into the value it denotes.
//! Regular literals process backslash escapes; verbatim literals only collapse
//! doubled quotes. A missing closing quote is tolerated so that values can be
//! computed for literals the user is still typing.

use crate::lexer::{scan_block_comment, scan_interpolated, scan_quoted, scan_verbatim};
use crate::TokenKind;

/// Returns the opening delimiter of a token kind that has one.
pub fn opening_delimiter(kind: TokenKind, text: &str) -> Option<&'static str> {
    let delimiter = match kind {
        TokenKind::StringLiteral => "\"",
        TokenKind::VerbatimStringLiteral => "@\"",
        TokenKind::InterpolatedStringLiteral => "$\"",
        TokenKind::InterpolatedVerbatimStringLiteral if text.starts_with("@$") => "@$\"",
        TokenKind::InterpolatedVerbatimStringLiteral => "$@\"",
        TokenKind::CharLiteral => "'",
        TokenKind::BlockComment => "/*",
        _ => return None,
    };
    Some(delimiter)
}

/// Returns true if a delimited token found its closing delimiter.
///
/// Tokens without a closing delimiter (identifiers, punctuation, trivia other
/// than block comments) are always terminated.
pub fn is_terminated(kind: TokenKind, text: &str) -> bool {
    let Some(open) = opening_delimiter(kind, text) else {
        return true;
    };
    let Some(rest) = text.strip_prefix(open) else {
        return false;
    };
    let rest = rest.as_bytes();

    let scan = match kind {
        TokenKind::StringLiteral => scan_quoted(rest, b'"'),
        TokenKind::CharLiteral => scan_quoted(rest, b'\''),
        TokenKind::VerbatimStringLiteral => scan_verbatim(rest),
        TokenKind::InterpolatedStringLiteral => scan_interpolated(rest, false),
        TokenKind::InterpolatedVerbatimStringLiteral => scan_interpolated(rest, true),
        TokenKind::BlockComment => scan_block_comment(rest),
        _ => return true,
    };

    scan.terminated && scan.len == rest.len()
}

/// Decodes the value of a string literal token.
///
/// Returns `None` for tokens that are not plain or verbatim string literals.
pub fn string_value(kind: TokenKind, text: &str) -> Option<String> {
    let open = match kind {
        TokenKind::StringLiteral => "\"",
        TokenKind::VerbatimStringLiteral => "@\"",
        _ => return None,
    };
    let body = text.strip_prefix(open)?;
    let body = if is_terminated(kind, text) {
        &body[..body.len() - 1]
    } else {
        body
    };

    Some(match kind {
        TokenKind::VerbatimStringLiteral => body.replace("\"\"", "\""),
        _ => unescape(body),
    })
}

/// Processes C# escape sequences in the body of a regular string literal.
///
/// Invalid escapes are kept as written.
pub fn unescape(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        let Some(&escape) = chars.peek() else {
            result.push('\\');
            break;
        };

        let simple = match escape {
            '\'' => Some('\''),
            '"' => Some('"'),
            '\\' => Some('\\'),
            '0' => Some('\0'),
            'a' => Some('\u{7}'),
            'b' => Some('\u{8}'),
            'f' => Some('\u{C}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'v' => Some('\u{B}'),
            _ => None,
        };
        if let Some(decoded) = simple {
            chars.next();
            result.push(decoded);
            continue;
        }

        let (min, max) = match escape {
            'x' => (1, 4),
            'u' => (4, 4),
            'U' => (8, 8),
            _ => {
                result.push('\\');
                continue;
            }
        };
        chars.next();

        let digits: String = chars
            .clone()
            .take(max)
            .take_while(|c| c.is_ascii_hexdigit())
            .collect();
        if digits.len() < min {
            result.push('\\');
            result.push(escape);
            continue;
        }
        for _ in 0..digits.len() {
            chars.next();
        }

        let code = u32::from_str_radix(&digits, 16).unwrap_or(0);
        match char::from_u32(code) {
            Some(decoded) => result.push(decoded),
            None if is_high_surrogate(code) => {
                let low = take_low_surrogate(&mut chars);
                match low.and_then(|low| combine_surrogates(code, low)) {
                    Some(decoded) => result.push(decoded),
                    None => result.push(char::REPLACEMENT_CHARACTER),
                }
            }
            None => result.push(char::REPLACEMENT_CHARACTER),
        }
    }

    result
}

fn is_high_surrogate(code: u32) -> bool {
    (0xD800..0xDC00).contains(&code)
}

fn combine_surrogates(high: u32, low: u32) -> Option<char> {
    if !(0xDC00..0xE000).contains(&low) {
        return None;
    }
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
}

/// Consumes a following `\uXXXX` escape if there is one.
fn take_low_surrogate(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<u32> {
    let lookahead: String = chars.clone().take(6).collect();
    let digits = lookahead.strip_prefix("\\u")?;
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let code = u32::from_str_radix(digits, 16).ok()?;
    for _ in 0..6 {
        chars.next();
    }
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_regular_value() {
        assert_eq!(
            string_value(TokenKind::StringLiteral, r#""TEST""#).as_deref(),
            Some("TEST")
        );
        assert_eq!(
            string_value(TokenKind::StringLiteral, r#""""#).as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_regular_escapes() {
        assert_eq!(unescape(r#"a\nb\t\"c\"\\"#), "a\nb\t\"c\"\\");
        assert_eq!(unescape(r"\0\a\b\f\r\v\'"), "\0\u{7}\u{8}\u{C}\r\u{B}'");
    }

    #[test]
    fn test_hex_and_unicode_escapes() {
        assert_eq!(unescape(r"\x41\x7a"), "Az");
        assert_eq!(unescape(r"\x41BCDE"), "\u{41BC}DE");
        assert_eq!(unescape(r"\u00e9"), "é");
        assert_eq!(unescape(r"\U0001F600"), "\u{1F600}");
        assert_eq!(unescape(r"\uD83D\uDE00"), "\u{1F600}");
        assert_eq!(unescape(r"\uD83Dx"), "\u{FFFD}x");
    }

    #[test]
    fn test_invalid_escapes_are_kept() {
        assert_eq!(unescape(r"\q"), r"\q");
        assert_eq!(unescape(r"\xZ"), r"\xZ");
        assert_eq!(unescape(r"\u12"), r"\u12");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_verbatim_value() {
        assert_eq!(
            string_value(TokenKind::VerbatimStringLiteral, r#"@"TE""ST""#).as_deref(),
            Some("TE\"ST")
        );
        assert_eq!(
            string_value(TokenKind::VerbatimStringLiteral, r#"@"C:\n""#).as_deref(),
            Some(r"C:\n")
        );
    }

    #[test]
    fn test_unterminated_values() {
        assert_eq!(
            string_value(TokenKind::StringLiteral, r#""TEST"#).as_deref(),
            Some("TEST")
        );
        assert_eq!(
            string_value(TokenKind::VerbatimStringLiteral, r#"@"TEST"#).as_deref(),
            Some("TEST")
        );
        assert_eq!(
            string_value(TokenKind::StringLiteral, r#"""#).as_deref(),
            Some("")
        );
        assert_eq!(
            string_value(TokenKind::StringLiteral, r#""ab\""#).as_deref(),
            Some("ab\"")
        );
    }

    #[test]
    fn test_value_of_other_kinds() {
        assert_eq!(string_value(TokenKind::InterpolatedStringLiteral, r#"$"x""#), None);
        assert_eq!(string_value(TokenKind::CharLiteral, "'x'"), None);
    }

    #[test]
    fn test_is_terminated() {
        assert!(is_terminated(TokenKind::StringLiteral, r#""a""#));
        assert!(!is_terminated(TokenKind::StringLiteral, r#""a"#));
        assert!(!is_terminated(TokenKind::StringLiteral, r#"""#));
        assert!(!is_terminated(TokenKind::StringLiteral, r#""a\""#));
        assert!(is_terminated(TokenKind::VerbatimStringLiteral, r#"@"a""b""#));
        assert!(!is_terminated(TokenKind::VerbatimStringLiteral, r#"@"a"""#));
        assert!(is_terminated(TokenKind::InterpolatedVerbatimStringLiteral, r#"@$"a""#));
        assert!(!is_terminated(TokenKind::InterpolatedStringLiteral, r#"$"a{b"#));
        assert!(is_terminated(TokenKind::BlockComment, "/* a */"));
        assert!(!is_terminated(TokenKind::BlockComment, "/* a"));
        assert!(is_terminated(TokenKind::Identifier, "x"));
    }
}

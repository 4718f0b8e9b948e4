//! Snapshot tests for the token stream.
//!
//! These tests pin down token kinds, spans and trivia attachment for small
//! C# fragments, including error-recovery cases.

use csharp_syntax::{parse, SyntaxToken};

fn describe(token: &SyntaxToken) -> String {
    let mut line = format!(
        "{:?} {}..{} {:?}",
        token.kind,
        u32::from(token.span.start),
        u32::from(token.span.end),
        token.text.as_str()
    );
    if !token.leading.is_empty() {
        line.push_str(&format!(" leading={:?}", token.leading_text()));
    }
    if !token.trailing.is_empty() {
        line.push_str(&format!(" trailing={:?}", token.trailing_text()));
    }
    line
}

fn dump(source: &str) -> String {
    let result = parse(source);
    let mut lines: Vec<String> = result.tree.tokens().iter().map(describe).collect();
    for error in &result.errors {
        lines.push(format!(
            "error: {} @ {}..{}",
            error,
            u32::from(error.span.start),
            u32::from(error.span.end)
        ));
    }
    lines.join("\n")
}

#[test]
fn test_verbatim_literal_argument() {
    insta::assert_snapshot!(dump("M(@\"a\"\"b\");\n"), @r#"
    Identifier 0..1 "M"
    LParen 1..2 "("
    VerbatimStringLiteral 2..9 "@\"a\"\"b\""
    RParen 9..10 ")"
    Semicolon 10..11 ";" trailing="\n"
    EndOfFile 12..12 ""
    "#);
}

#[test]
fn test_unterminated_literal_and_comment_trivia() {
    insta::assert_snapshot!(dump("x = \"open\n/* c */ $@\"{y}\""), @r#"
    Identifier 0..1 "x" trailing=" "
    Operator 2..3 "=" trailing=" "
    StringLiteral 4..9 "\"open" trailing="\n"
    InterpolatedVerbatimStringLiteral 18..25 "$@\"{y}\"" leading="/* c */ "
    EndOfFile 25..25 ""
    error: unterminated string literal @ 4..9
    "#);
}

#[test]
fn test_method_body() {
    let source = "public static void M()\n{\n    var x = \"TEST\";\n}";
    let result = parse(source);
    assert!(result.errors.is_empty());

    let literal = result
        .tree
        .tokens()
        .iter()
        .find(|t| t.is_string_literal())
        .unwrap();
    assert_eq!(literal.text, "\"TEST\"");
    assert_eq!(literal.leading_text(), "");
    assert_eq!(literal.trailing_text(), "");
    assert_eq!(&source[literal.span.as_range()], "\"TEST\"");
    assert!(literal.is_terminated());
}

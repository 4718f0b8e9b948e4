//! Integration tests for the `add-interpolation` binary.
//!
//! Each test writes a C# file to a temporary directory, runs the binary on it
//! and checks the exit code, stdout and (for `--write`) the file contents.

use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// TEST INFRASTRUCTURE
// ============================================================================

const PROGRAM: &str = "class Program\n{\n    static void Main()\n    {\n        Console.WriteLine(\"Hello\");\n    }\n}\n";

/// Offset of the `"Hello"` literal in [`PROGRAM`].
const LITERAL_START: usize = 71;

struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    fn new(source: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Program.cs");
        fs::write(&path, source).unwrap();
        Self { _dir: dir, path }
    }

    fn run(&self, args: &[&str]) -> Output {
        run_binary(&self.path, args)
    }

    fn contents(&self) -> String {
        fs::read_to_string(&self.path).unwrap()
    }
}

fn run_binary(path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_add-interpolation"))
        .arg(path)
        .args(args)
        .env_remove("ADD_INTERPOLATION_TRACE")
        .output()
        .expect("failed to run add-interpolation")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[derive(Debug, Deserialize)]
struct JsonEdit {
    label: String,
    file: String,
    start: JsonPosition,
    end: JsonPosition,
    replacement: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct JsonPosition {
    line: u32,
    column: u32,
    offset: u32,
}

// ============================================================================
// OUTPUT FORMATS
// ============================================================================

#[test]
fn test_fixture_offset() {
    assert_eq!(&PROGRAM[LITERAL_START..LITERAL_START + 7], "\"Hello\"");
}

#[test]
fn test_human_output() {
    let fixture = Fixture::new(PROGRAM);
    let output = fixture.run(&["--offset", "74"]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output), PROGRAM.replace("(\"Hello\")", "($\"Hello\")"));
    // The file is left alone without --write.
    assert_eq!(fixture.contents(), PROGRAM);
}

#[test]
fn test_edit_output() {
    let fixture = Fixture::new(PROGRAM);
    let output = fixture.run(&["--line", "5", "--column", "29", "--output", "edit"]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output), "$\"Hello\"\n");
}

#[test]
fn test_json_output() {
    let fixture = Fixture::new(PROGRAM);
    let output = fixture.run(&["--offset", "78", "--output", "json"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let edit: JsonEdit = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(edit.label, "Add interpolation to string");
    assert!(edit.file.ends_with("Program.cs"));
    assert_eq!(
        edit.start,
        JsonPosition {
            line: 5,
            column: 27,
            offset: 71
        }
    );
    assert_eq!(
        edit.end,
        JsonPosition {
            line: 5,
            column: 34,
            offset: 78
        }
    );
    assert_eq!(edit.replacement, "$\"Hello\"");
}

// ============================================================================
// WRITING
// ============================================================================

#[test]
fn test_write_in_place() {
    let fixture = Fixture::new(PROGRAM);
    let output = fixture.run(&["--offset", "71", "--write"]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        fixture.contents(),
        PROGRAM.replace("(\"Hello\")", "($\"Hello\")")
    );
}

#[test]
fn test_write_verbatim_literal() {
    let fixture = Fixture::new("var path = @\"C:\\temp\\\"\"x\"\"\";\n");
    let output = fixture.run(&["--offset", "14", "--write"]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(fixture.contents(), "var path = $@\"C:\\temp\\\"\"x\"\"\";\n");
}

#[test]
fn test_write_open_ended_literal() {
    let fixture = Fixture::new("var x = \"TEST;\nvar y = 1;\n");
    let output = fixture.run(&["--offset", "12", "--write"]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(fixture.contents(), "var x = $\"TEST;\nvar y = 1;\n");
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_not_applicable() {
    let fixture = Fixture::new(PROGRAM);
    let output = fixture.run(&["--offset", "20", "--write"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains(
        "No string literal at the given position: the caret is on identifier `static`"
    ));
    assert_eq!(fixture.contents(), PROGRAM);
}

#[test]
fn test_offset_out_of_range() {
    let fixture = Fixture::new(PROGRAM);
    let output = fixture.run(&["--offset", "5000"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("is past the end of the file"));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let output = run_binary(&dir.path().join("Missing.cs"), &["--offset", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to read"));
}

#[test]
fn test_trace_flag() {
    let fixture = Fixture::new(PROGRAM);
    let output = fixture.run(&["--offset", "74", "--output", "edit", "--trace"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("add-interpolation: found \"Hello\" at 71..78"));
}

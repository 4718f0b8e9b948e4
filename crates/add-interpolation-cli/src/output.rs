//! Output formatting.

use crate::cli::OutputFormat;
use crate::error::CliError;
use camino::Utf8Path;
use serde::Serialize;
use source_text::{ByteOffset, LineCol, LineIndex, TextEdit};

/// A formatted edit for JSON output.
#[derive(Debug, Serialize)]
pub struct FormattedEdit {
    /// The action label.
    pub label: String,
    /// The file path.
    pub file: String,
    /// Start of the replaced literal.
    pub start: Position,
    /// End of the replaced literal.
    pub end: Position,
    /// The text that replaces the literal.
    pub replacement: String,
}

/// A position in the source.
#[derive(Debug, Serialize)]
pub struct Position {
    /// 1-indexed line number.
    pub line: u32,
    /// 1-indexed column number.
    pub column: u32,
    /// Byte offset.
    pub offset: u32,
}

impl Position {
    fn new(line_index: &LineIndex, offset: ByteOffset) -> Self {
        let line_col = line_index.line_col(offset).unwrap_or(LineCol::new(0, 0));
        Self {
            line: line_col.line + 1,
            column: line_col.col + 1,
            offset: offset.into(),
        }
    }
}

/// What a run produced.
pub struct Rewrite<'a> {
    /// The action label.
    pub label: &'a str,
    /// The file that was rewritten.
    pub file: &'a Utf8Path,
    /// The original contents.
    pub source: &'a str,
    /// The edit applied to them.
    pub edit: &'a TextEdit,
    /// The rewritten contents.
    pub text: &'a str,
}

/// Formats a rewrite for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a rewrite. With `written`, the human format prints nothing
    /// since the document is already on disk.
    pub fn format(&self, rewrite: &Rewrite<'_>, written: bool) -> Result<String, CliError> {
        match self.format {
            OutputFormat::Human if written => Ok(String::new()),
            OutputFormat::Human => Ok(rewrite.text.to_string()),
            OutputFormat::Edit => Ok(format!("{}\n", rewrite.edit.new_text)),
            OutputFormat::Json => self.format_json(rewrite),
        }
    }

    /// Formats as JSON output.
    fn format_json(&self, rewrite: &Rewrite<'_>) -> Result<String, CliError> {
        let line_index = LineIndex::new(rewrite.source);
        let formatted = FormattedEdit {
            label: rewrite.label.to_string(),
            file: rewrite.file.to_string(),
            start: Position::new(&line_index, rewrite.edit.span.start),
            end: Position::new(&line_index, rewrite.edit.span.end),
            replacement: rewrite.edit.new_text.clone(),
        };

        let mut json = serde_json::to_string_pretty(&formatted)?;
        json.push('\n');
        Ok(json)
    }
}

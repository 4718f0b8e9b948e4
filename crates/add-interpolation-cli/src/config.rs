//! Run configuration.
//!
//! Combines the command line with the environment and resolves the caret
//! against the file contents.

use crate::cli::{Args, OutputFormat};
use crate::error::CliError;
use camino::Utf8PathBuf;
use source_text::{ByteOffset, LineCol, LineIndex, Span};
use std::fs;

/// Environment variable that turns on tracing.
pub const TRACE_ENV: &str = "ADD_INTERPOLATION_TRACE";

/// Everything a run needs, with the position already resolved.
#[derive(Debug, Clone)]
pub struct Config {
    /// The file being rewritten.
    pub file: Utf8PathBuf,
    /// Its contents.
    pub source: String,
    /// The caret or selection.
    pub selection: Span,
    /// Rewrite the file in place.
    pub write: bool,
    /// How to print the result.
    pub output: OutputFormat,
    /// Report progress on stderr.
    pub trace: bool,
}

impl Config {
    /// Reads the file named by `args` and resolves the selection in it.
    pub fn load(args: &Args) -> Result<Self, CliError> {
        let source = fs::read_to_string(&args.file).map_err(|source| CliError::Io {
            action: "read",
            path: args.file.clone(),
            source,
        })?;
        Self::from_source(args, source)
    }

    /// Builds the configuration for already-loaded contents.
    pub fn from_source(args: &Args, source: String) -> Result<Self, CliError> {
        let selection = resolve_selection(args, &source)?;
        let trace = args.trace || read_env_bool(TRACE_ENV).unwrap_or(false);

        Ok(Self {
            file: args.file.clone(),
            source,
            selection,
            write: args.write,
            output: args.output,
            trace,
        })
    }
}

/// Resolves the caret (and optional selection end) to a span of `source`.
fn resolve_selection(args: &Args, source: &str) -> Result<Span, CliError> {
    let start = match (args.offset, args.line, args.column) {
        (Some(offset), _, _) => ByteOffset::from(offset),
        (None, Some(line), Some(column)) => {
            let line_col = LineCol::from_one_based(line, column)
                .ok_or_else(|| CliError::position("lines and columns start at 1"))?;
            LineIndex::new(source).offset(line_col).ok_or_else(|| {
                CliError::position(format!("line {} column {} is not in the file", line, column))
            })?
        }
        _ => return Err(CliError::position("no caret position given")),
    };
    let end = args.selection_end.map_or(start, ByteOffset::from);

    check_offset(source, start)?;
    check_offset(source, end)?;
    if end < start {
        return Err(CliError::position(format!(
            "selection end {} is before its start {}",
            u32::from(end),
            u32::from(start)
        )));
    }

    Ok(Span::new(start, end))
}

fn check_offset(source: &str, offset: ByteOffset) -> Result<(), CliError> {
    let index = usize::from(offset);
    if index > source.len() {
        return Err(CliError::position(format!(
            "offset {} is past the end of the file ({} bytes)",
            index,
            source.len()
        )));
    }
    if !source.is_char_boundary(index) {
        return Err(CliError::position(format!(
            "offset {} is inside a multi-byte character",
            index
        )));
    }
    Ok(())
}

fn read_env_bool(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Turn the C# string literal at a position into an interpolated string.
#[derive(Debug, Parser)]
#[command(name = "add-interpolation")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// C# source file to rewrite
    pub file: Utf8PathBuf,

    /// Byte offset of the caret
    #[arg(long, conflicts_with_all = ["line", "column"], required_unless_present = "line")]
    pub offset: Option<u32>,

    /// 1-indexed line of the caret
    #[arg(long, requires = "column")]
    pub line: Option<u32>,

    /// 1-indexed column of the caret, in bytes
    #[arg(long, requires = "line")]
    pub column: Option<u32>,

    /// Byte offset where the selection ends (defaults to the caret)
    #[arg(long = "selection-end")]
    pub selection_end: Option<u32>,

    /// Rewrite the file in place
    #[arg(long)]
    pub write: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Report located literals and failures on stderr
    #[arg(long)]
    pub trace: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The rewritten document (default)
    #[default]
    Human,
    /// JSON description of the edit
    Json,
    /// Only the replacement text
    Edit,
}

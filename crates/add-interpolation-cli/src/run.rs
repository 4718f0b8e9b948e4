//! Runs the refactoring over one file.

use crate::config::Config;
use crate::error::CliError;
use crate::output::{Formatter, Rewrite};
use add_interpolation::{AddInterpolation, CancellationToken, Document, DocumentHost, RefactorOptions};
use csharp_syntax::{SyntaxTree, TokenKind};
use source_text::ByteOffset;
use std::fs;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The literal was rewritten.
    Applied,
    /// No string literal at the position.
    NotApplicable {
        /// What the caret is on instead.
        reason: String,
    },
}

/// Computes and applies the action, then prints the result.
pub async fn run(config: Config) -> Result<Outcome, CliError> {
    let document = Document::new(config.source);
    let cancel = CancellationToken::new();
    let refactoring = AddInterpolation::new(RefactorOptions {
        trace: config.trace,
    });

    let Some(action) = refactoring
        .compute(&document, config.selection, &cancel)
        .await
    else {
        let reason = match document.syntax_tree(&cancel).await {
            Ok(tree) => describe_position(&tree, config.selection.start),
            Err(e) => e.to_string(),
        };
        return Ok(Outcome::NotApplicable { reason });
    };

    let edit = action.try_edit()?;
    let text = edit.apply(action.source())?;

    if config.write {
        fs::write(&config.file, &text).map_err(|source| CliError::Io {
            action: "write",
            path: config.file.clone(),
            source,
        })?;
        if config.trace {
            eprintln!("add-interpolation: wrote {}", config.file);
        }
    }

    let rewrite = Rewrite {
        label: action.label(),
        file: &config.file,
        source: action.source(),
        edit: &edit,
        text: &text,
    };
    let output = Formatter::new(config.output).format(&rewrite, config.write)?;
    print!("{}", output);

    Ok(Outcome::Applied)
}

/// Describes what sits at `offset`, trivia included.
fn describe_position(tree: &SyntaxTree, offset: ByteOffset) -> String {
    let Some(token) = tree.token_at(offset) else {
        return "the position is past the end of the file".to_string();
    };

    let trivia = token
        .leading
        .iter()
        .chain(&token.trailing)
        .find(|trivia| trivia.span.contains(offset));
    if let Some(trivia) = trivia {
        return format!("the caret is on {}", trivia.kind);
    }

    match token.kind {
        TokenKind::EndOfFile => "the caret is at the end of the file".to_string(),
        TokenKind::InterpolatedStringLiteral | TokenKind::InterpolatedVerbatimStringLiteral => {
            "the string is already interpolated".to_string()
        }
        kind => format!("the caret is on {} `{}`", kind, token.text),
    }
}

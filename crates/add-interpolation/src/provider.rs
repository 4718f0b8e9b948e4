//! The "Add interpolation to string" code action.
//!
//! A host supplies the syntax tree of a document; the provider decides
//! whether the action is available at a selection and, when invoked, produces
//! the rewritten document. Nothing here fails loudly: a missing literal, a
//! cancelled lookup or a failed rewrite all mean "no action" or "no edit".

use crate::error::RefactorError;
use crate::literal::StringLiteralToken;
use crate::locator;
use crate::transform::{transform, InterpolatedLiteral};
use csharp_syntax::SyntaxTree;
use source_text::{Span, TextEdit};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// The label shown for the action.
pub const ACTION_LABEL: &str = "Add interpolation to string";

/// A flag shared between the caller and a running operation.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fails with [`HostError::Cancelled`] once cancellation has been requested.
    pub fn check(&self) -> Result<(), HostError> {
        if self.is_cancelled() {
            Err(HostError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// A failure reported by a document host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The caller cancelled the lookup.
    #[error("operation cancelled")]
    Cancelled,

    /// The document changed while the lookup was running.
    #[error("document snapshot is stale")]
    Stale,
}

/// Supplies syntax trees to the code action.
pub trait DocumentHost {
    /// Returns a consistent syntax tree of the document.
    ///
    /// The tree carries its own source text; edits are computed against it.
    fn syntax_tree(
        &self,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<Arc<SyntaxTree>, HostError>> + Send;
}

/// An in-memory document that parses itself on first use.
#[derive(Debug, Default)]
pub struct Document {
    text: String,
    tree: OnceLock<Arc<SyntaxTree>>,
}

impl Document {
    /// Creates a document over `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tree: OnceLock::new(),
        }
    }

    /// Returns the document text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DocumentHost for Document {
    async fn syntax_tree(&self, cancel: &CancellationToken) -> Result<Arc<SyntaxTree>, HostError> {
        cancel.check()?;
        let tree = self.tree.get_or_init(|| Arc::new(SyntaxTree::parse(&self.text).tree));
        Ok(Arc::clone(tree))
    }
}

/// Options for the code action.
#[derive(Debug, Clone, Default)]
pub struct RefactorOptions {
    /// Report located literals and failures on stderr.
    pub trace: bool,
}

/// The add-interpolation refactoring.
#[derive(Debug, Clone, Default)]
pub struct AddInterpolation {
    options: RefactorOptions,
}

impl AddInterpolation {
    /// Creates the refactoring with the given options.
    pub fn new(options: RefactorOptions) -> Self {
        Self { options }
    }

    /// Returns the action available at `selection`, if any.
    ///
    /// Returns `None` when no string literal is at the selection, when
    /// `cancel` fires before the literal is found, or when the host fails.
    pub async fn compute<H: DocumentHost>(
        &self,
        host: &H,
        selection: Span,
        cancel: &CancellationToken,
    ) -> Option<CodeAction> {
        let tree = match host.syntax_tree(cancel).await {
            Ok(tree) => tree,
            Err(e) => {
                if self.options.trace {
                    eprintln!("Warning: syntax tree unavailable: {}", e);
                }
                return None;
            }
        };

        if cancel.is_cancelled() {
            return None;
        }

        let literal = locator::locate(&tree, selection)?;
        if self.options.trace {
            eprintln!(
                "add-interpolation: found {} at {}..{}",
                literal.raw_text(),
                u32::from(literal.span().start),
                u32::from(literal.span().end)
            );
        }

        Some(CodeAction {
            label: ACTION_LABEL,
            tree,
            literal,
            trace: self.options.trace,
        })
    }
}

/// Returns the action available at `selection` with default options.
pub async fn compute_available_action<H: DocumentHost>(
    host: &H,
    selection: Span,
    cancel: &CancellationToken,
) -> Option<CodeAction> {
    AddInterpolation::default().compute(host, selection, cancel).await
}

/// A proposed rewrite of one string literal.
#[derive(Debug, Clone)]
pub struct CodeAction {
    label: &'static str,
    tree: Arc<SyntaxTree>,
    literal: StringLiteralToken,
    trace: bool,
}

impl CodeAction {
    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the literal the action rewrites.
    pub fn literal(&self) -> &StringLiteralToken {
        &self.literal
    }

    /// Returns the source text the action was computed against.
    pub fn source(&self) -> &str {
        self.tree.source()
    }

    /// Computes the interpolated replacement.
    pub fn interpolated(&self) -> Result<InterpolatedLiteral, RefactorError> {
        transform(&self.literal)
    }

    /// Computes the edit, reporting why it could not be produced.
    pub fn try_edit(&self) -> Result<TextEdit, RefactorError> {
        let replacement = self.interpolated()?;
        Ok(TextEdit::replace(self.literal.span(), replacement.text()))
    }

    /// Returns the edit replacing the literal, or `None` if it cannot be produced.
    pub fn edit(&self) -> Option<TextEdit> {
        match self.try_edit() {
            Ok(edit) => Some(edit),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    /// Produces the rewritten document.
    ///
    /// Returns `None` when cancelled or when the edit cannot be produced or
    /// applied; the original text is never partially modified.
    pub fn apply(&self, cancel: &CancellationToken) -> Option<DocumentSnapshot> {
        if cancel.is_cancelled() {
            return None;
        }

        let edit = self.edit()?;
        match edit.apply(self.tree.source()) {
            Ok(text) => Some(DocumentSnapshot { text, edit }),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    fn report(&self, error: &dyn std::error::Error) {
        if self.trace {
            eprintln!("Warning: {} failed: {}", self.label, error);
        }
    }
}

/// The document text after an action was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    text: String,
    edit: TextEdit,
}

impl DocumentSnapshot {
    /// Returns the new document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the edit that produced this snapshot.
    pub fn edit(&self) -> &TextEdit {
        &self.edit
    }

    /// Turns the snapshot into a document for further actions.
    pub fn into_document(self) -> Document {
        Document::new(self.text)
    }
}

//! Add interpolation to a C# string literal.
//!
//! This crate turns a plain or verbatim string literal into the equivalent
//! interpolated string by adding a `$`:
//!
//! - `"TEST"` becomes `$"TEST"`
//! - `@"TE""ST"` becomes `$@"TE""ST"`
//! - an unterminated `"TEST` becomes `$"TEST` and stays unterminated
//!
//! The payload is never re-escaped, and the literal's trivia is preserved.
//!
//! # Example
//!
//! ```
//! use add_interpolation::{locate, transform};
//! use csharp_syntax::{parse, Span};
//!
//! let result = parse("var greeting = \"hello\";");
//! let literal = locate(&result.tree, Span::empty(17u32)).unwrap();
//! let interpolated = transform(&literal).unwrap();
//! assert_eq!(interpolated.text(), "$\"hello\"");
//! ```
//!
//! Hosts that own a document use the [`provider`] API instead, which also
//! applies the edit.

mod error;
mod literal;
mod locator;
pub mod provider;
mod transform;

pub use error::RefactorError;
pub use literal::{LiteralForm, StringLiteralToken};
pub use locator::{locate, locate_token};
pub use provider::{
    compute_available_action, AddInterpolation, CancellationToken, CodeAction, Document,
    DocumentHost, DocumentSnapshot, HostError, RefactorOptions, ACTION_LABEL,
};
pub use transform::{transform, ContentToken, EndMarker, InterpolatedLiteral, StartMarker};

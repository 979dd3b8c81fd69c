//! Brisk lexer: bytes in, tokens out.
//!
//! - [`SourceBuffer`] owns a sentinel-terminated copy of one source unit
//! - [`Cursor`] walks it forward by index
//! - [`Scanner`] turns it into [`Token`]s, one per call
//! - [`lex`] drives a scanner to `Eof` and collects a [`TokenList`]
//!
//! Diagnostics go to any [`DiagnosticSink`]; the scan itself cannot fail.
//!
//! ```
//! use brisk_diagnostic::Diagnostic;
//! use brisk_ir::TokenKind;
//! use brisk_lexer::{lex, SourceBuffer};
//!
//! let source = SourceBuffer::new("demo.bk", "var x -> 1");
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let tokens = lex(&source, &mut diagnostics);
//!
//! assert_eq!(
//!     tokens.kinds(),
//!     [
//!         TokenKind::Var,
//!         TokenKind::Ident,
//!         TokenKind::Arrow,
//!         TokenKind::NumericConstant,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert!(diagnostics.is_empty());
//! ```

mod cursor;
mod keywords;
mod operators;
mod scanner;
mod source_buffer;

pub use brisk_diagnostic::DiagnosticSink;
pub use brisk_ir::{Span, Token, TokenKind, TokenList};
pub use cursor::Cursor;
pub use scanner::Scanner;
pub use source_buffer::{SourceBuffer, SourceError};

use tracing::debug;

/// Scan all of `source` into a [`TokenList`] ending in `Eof`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(file = source.name(), bytes = source.len())
)]
pub fn lex<S: DiagnosticSink + ?Sized>(source: &SourceBuffer, sink: &mut S) -> TokenList {
    // Roughly one token per four bytes of typical source.
    let mut tokens = TokenList::with_capacity(source.len() as usize / 4 + 1);
    let mut scanner = Scanner::new(source, sink);
    loop {
        let token = scanner.next_token();
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }
    debug!(
        tokens = tokens.len(),
        errors = scanner.error_count(),
        warnings = scanner.warning_count(),
        "lexed"
    );
    tokens
}

//! Diagnostic system for the Brisk front end.
//!
//! Every diagnostic carries:
//! - an error code for searchability (`brisk explain E0001`)
//! - a severity (error or warning)
//! - a message (what went wrong)
//! - a primary span (where it went wrong)
//! - optional notes
//!
//! Producers report through the [`DiagnosticSink`] trait and never stop
//! because of it; consumers collect into a [`DiagnosticQueue`] and render
//! with an [`emitter::DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod queue;
mod sink;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::DiagnosticSink;

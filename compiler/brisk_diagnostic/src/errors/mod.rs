//! Embedded error documentation for `brisk explain`.
//!
//! Each error code has a markdown file in this directory that explains the
//! diagnostic, shows an example, and says how to fix it. The files are
//! embedded at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `XNNNN.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::W0001, include_str!("W0001.md")),
    (ErrorCode::W0002, include_str!("W0002.md")),
];

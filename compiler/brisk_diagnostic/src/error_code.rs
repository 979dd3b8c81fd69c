//! Error codes for front-end diagnostics.
//!
//! Each code is a unique identifier (e.g., `E0001`) used for `brisk explain`
//! lookups. `E` codes are errors, `W` codes are warnings; the first digit is
//! the phase (0 = lexer).

use std::fmt;

/// Error codes for all front-end diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Lexer errors (E0xxx)
    /// Invalid character in source
    E0001,

    // Lexer warnings (W0xxx)
    /// Nul character embedded in the middle of a file
    W0001,
    /// Line comment reaches end of file without a newline
    W0002,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 3] = [ErrorCode::E0001, ErrorCode::W0001, ErrorCode::W0002];

    /// The code as written in diagnostics, e.g. `"E0001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::W0001 => "W0001",
            ErrorCode::W0002 => "W0002",
        }
    }

    /// One-line summary of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character in source",
            ErrorCode::W0001 => "nul character embedded in middle of file",
            ErrorCode::W0002 => "line comment without trailing newline",
        }
    }

    /// Check if this is a warning code (Wxxxx).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W0001 | ErrorCode::W0002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code string like `"E0001"` or `"w0002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`], so new codes are
/// picked up automatically.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}

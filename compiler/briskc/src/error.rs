//! Driver errors. These end the command with exit status 2; lexical
//! diagnostics are not errors at this level.

use brisk_lexer::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command was invoked without what it needs.
    #[error("{0}")]
    Usage(&'static str),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unknown error code `{0}` (codes look like E0001 or W0001)")]
    UnknownErrorCode(String),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether the usage text should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            CliError::Usage(_) | CliError::UnknownCommand(_) | CliError::UnknownOption(_)
        )
    }
}

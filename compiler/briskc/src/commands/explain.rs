//! The `explain` command: display documentation for diagnostic codes.

use std::io::Write;

use brisk_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Write the long-form documentation for `code_str` to `out`.
pub fn explain_error(code_str: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let code: ErrorCode = code_str
        .parse()
        .map_err(|()| CliError::UnknownErrorCode(code_str.to_string()))?;

    if let Some(doc) = ErrorDocs::get(code) {
        writeln!(out, "{}", doc.trim_end())?;
    } else {
        writeln!(out, "{code}: {}", code.description())?;
    }
    Ok(())
}

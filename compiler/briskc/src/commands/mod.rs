//! Command implementations for the `brisk` driver.

mod explain;
mod lex;

use std::io::Write;

pub use explain::explain_error;
pub use lex::{lex_file, lex_source, LexOptions, LexOutcome};

use crate::CliError;

/// Exit status when lexing reported at least one error.
pub const EXIT_LEX_ERRORS: u8 = 1;
/// Exit status for driver errors (bad usage, unreadable file).
pub const EXIT_CLI_ERROR: u8 = 2;

/// Run the command named by `args` (program name already stripped).
///
/// Token dumps and docs go to `out`; diagnostics go to `err`. `err_is_tty`
/// resolves `--color=auto`. Returns the process exit status.
pub fn dispatch(
    args: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
    err_is_tty: bool,
) -> Result<u8, CliError> {
    let Some(command) = args.first() else {
        print_usage(out)?;
        return Ok(0);
    };

    match command.as_str() {
        "lex" => {
            let options = LexOptions::parse(&args[1..])?;
            let outcome = lex_file(&options, out, err, err_is_tty)?;
            Ok(if outcome.errors > 0 { EXIT_LEX_ERRORS } else { 0 })
        }
        "explain" | "--explain" => {
            let code = args
                .get(1)
                .ok_or(CliError::Usage("usage: brisk explain <CODE>"))?;
            explain_error(code, out)?;
            Ok(0)
        }
        "help" | "--help" | "-h" => {
            print_usage(out)?;
            Ok(0)
        }
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

/// Write the usage text.
pub fn print_usage(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Brisk front end")?;
    writeln!(out)?;
    writeln!(out, "Usage: brisk <command> [options]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  lex <file> [options]  Tokenize a file and print the tokens")?;
    writeln!(out, "  explain <code>        Explain a diagnostic code (e.g. E0001)")?;
    writeln!(out, "  help                  Show this help message")?;
    writeln!(out)?;
    writeln!(out, "Options for lex:")?;
    writeln!(out, "  --color=<auto|always|never>  Color diagnostics (default: auto)")?;
    writeln!(out, "  --error-limit=<n>            Stop reporting after n errors (0: no limit)")?;
    writeln!(out, "  --no-dedup                   Keep repeated diagnostics")?;
    writeln!(out, "  --quiet                      Print diagnostics only, no tokens")?;
    writeln!(out)?;
    writeln!(
        out,
        "Set {}=<filter> (or RUST_LOG) to enable logging.",
        crate::tracing_setup::LOG_ENV
    )?;
    Ok(())
}

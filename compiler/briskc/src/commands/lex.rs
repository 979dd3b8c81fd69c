//! The `lex` command: tokenize a file and dump the tokens.
//!
//! Output format, one token per line after a header:
//!
//! ```text
//! Tokens for 'main.bk' (4 tokens):
//!   kw_var 'var' @ 0..3
//!   identifier 'x' @ 4..5
//!   ...
//! ```

use std::io::Write;
use std::path::PathBuf;

use brisk_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use brisk_diagnostic::{DiagnosticConfig, DiagnosticQueue};
use brisk_lexer::{lex, SourceBuffer, TokenList};
use tracing::debug;

use crate::CliError;

/// Options for `brisk lex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub path: PathBuf,
    pub color: ColorMode,
    pub diagnostics: DiagnosticConfig,
    /// Print diagnostics only.
    pub quiet: bool,
}

impl LexOptions {
    /// Parse the arguments after `lex`. Flags may come before or after the
    /// path.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut path = None;
        let mut color = ColorMode::default();
        let mut diagnostics = DiagnosticConfig::default();
        let mut quiet = false;

        for arg in args {
            if let Some(value) = arg.strip_prefix("--color=") {
                color = ColorMode::from_flag(value).ok_or_else(|| CliError::InvalidValue {
                    flag: "--color",
                    value: value.to_string(),
                })?;
            } else if let Some(value) = arg.strip_prefix("--error-limit=") {
                diagnostics.error_limit =
                    value.parse().map_err(|_| CliError::InvalidValue {
                        flag: "--error-limit",
                        value: value.to_string(),
                    })?;
            } else if arg == "--no-dedup" {
                diagnostics.deduplicate = false;
            } else if arg == "--quiet" || arg == "-q" {
                quiet = true;
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownOption(arg.clone()));
            } else if path.is_none() {
                path = Some(PathBuf::from(arg));
            } else {
                return Err(CliError::Usage("usage: brisk lex <file> [options]"));
            }
        }

        let path = path.ok_or(CliError::Usage("usage: brisk lex <file> [options]"))?;
        Ok(LexOptions {
            path,
            color,
            diagnostics,
            quiet,
        })
    }
}

/// Diagnostic totals for one run. `errors` includes errors dropped by the
/// error limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOutcome {
    pub tokens: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Read `options.path` and run [`lex_source`] on it.
pub fn lex_file(
    options: &LexOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    err_is_tty: bool,
) -> Result<LexOutcome, CliError> {
    let source = SourceBuffer::from_file(&options.path)?;
    lex_source(&source, options, out, err, err_is_tty)
}

/// Tokenize `source`, dump tokens to `out` and render diagnostics to `err`.
pub fn lex_source(
    source: &SourceBuffer,
    options: &LexOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    err_is_tty: bool,
) -> Result<LexOutcome, CliError> {
    let mut queue = DiagnosticQueue::with_config(options.diagnostics.clone());
    let tokens = lex(source, &mut queue);

    if !options.quiet {
        dump_tokens(source, &tokens, out)?;
    }

    let outcome = LexOutcome {
        tokens: tokens.len(),
        errors: queue.error_count() + queue.suppressed_count(),
        warnings: queue.warning_count(),
    };
    let suppressed = queue.suppressed_count();
    debug!(?outcome, suppressed, "lex command finished");

    let diagnostics = queue.flush();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut *err, options.color, err_is_tty)
            .with_source(source.name(), source.as_bytes());
        emitter.emit_all(&diagnostics);
        emitter.emit_summary(outcome.errors, outcome.warnings);
        emitter.flush();
    }

    if suppressed > 0 {
        writeln!(
            err,
            "note: {suppressed} more error{} not shown (see --error-limit)",
            if suppressed == 1 { "" } else { "s" }
        )?;
    }

    Ok(outcome)
}

fn dump_tokens(
    source: &SourceBuffer,
    tokens: &TokenList,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        source.name(),
        tokens.len()
    )?;
    for token in tokens {
        let text = String::from_utf8_lossy(source.text(token.span));
        writeln!(out, "  {} '{}' @ {}", token.kind, text.escape_debug(), token.span)?;
    }
    Ok(())
}

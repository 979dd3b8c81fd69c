//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! With a source attached, each label is rendered as
//! `file:line:col` followed by the offending line and a caret underline.
//! Without one, labels fall back to raw byte ranges.

use std::io::Write;

use brisk_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// The file a diagnostic points into.
struct SourceSnippet<'src> {
    name: String,
    bytes: &'src [u8],
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceSnippet<'src>>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source file so spans render as `file:line:col` with a
    /// snippet.
    #[must_use]
    pub fn with_source(mut self, name: impl Into<String>, bytes: &'src [u8]) -> Self {
        self.source = Some(SourceSnippet {
            name: name.into(),
            bytes,
            lines: LineOffsetTable::build(bytes),
        });
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Fallback label rendering: byte range and message.
    fn write_raw_label(&mut self, label: &Label, color: &str) {
        let _ = write!(self.writer, "  --> {:?}", label.span);
        if !label.message.is_empty() {
            let _ = write!(self.writer, ": ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }

    /// Snippet rendering: location header, source line and caret underline.
    fn write_snippet_label(&mut self, label: &Label, color: &str) {
        let Some(source) = &self.source else {
            return;
        };
        let (line, col) = source.lines.offset_to_line_col(source.bytes, label.span.start);
        let text = String::from_utf8_lossy(source.lines.line_text(source.bytes, line)).into_owned();
        let carets = caret_width(source, label.span, line);
        let gutter = line.to_string().len();
        let location = format!("{}:{line}:{col}", source.name);

        let _ = writeln!(self.writer, "{:gutter$}--> {location}", "");
        let _ = writeln!(self.writer, "{:gutter$} |", "");
        let _ = writeln!(self.writer, "{line} | {}", text.replace('\t', " "));
        let pad = " ".repeat(col.saturating_sub(1) as usize);
        let _ = write!(self.writer, "{:gutter$} | {pad}", "");
        self.write_colored(&"^".repeat(carets), color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

/// Number of characters to underline: the span's extent on its first line,
/// at least one.
fn caret_width(source: &SourceSnippet<'_>, span: Span, line: u32) -> usize {
    let line_start = source.lines.line_start(line) as usize;
    let line_end = line_start + source.lines.line_text(source.bytes, line).len();
    let start = (span.start as usize).clamp(line_start, line_end);
    let end = (span.end as usize).clamp(start, line_end);
    let chars = source.bytes[start..end]
        .iter()
        .filter(|&&b| !(0x80..0xC0).contains(&b))
        .count();
    chars.max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        let color = Self::severity_color(diagnostic.severity);
        self.write_colored(&diagnostic.severity.to_string(), color);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            if self.source.is_some() {
                self.write_snippet_label(label, color);
            } else {
                self.write_raw_label(label, color);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count == 0 && warning_count == 0 {
            return;
        }

        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = write!(
                self.writer,
                ": {error_count} error{} emitted",
                plural_s(error_count)
            );
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    "; {warning_count} warning{}",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}

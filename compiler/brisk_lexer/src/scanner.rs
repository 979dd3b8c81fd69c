//! The scanning state machine.
//!
//! One call to [`Scanner::next_token`] skips insignificant bytes
//! (whitespace, line comments, embedded NULs) and then classifies exactly
//! one token by its first byte. The dispatch restarts with `continue`
//! after anything that does not produce a token.
//!
//! # Recovery
//!
//! Scanning never fails. Malformed input is reported through the
//! [`DiagnosticSink`] and still yields a token: an unclassifiable
//! byte becomes one `Unknown` token. Every non-`Eof` token consumes at
//! least one byte, so a scan always terminates.
//!
//! # End of input
//!
//! The `Eof` token has an empty span at the buffer length and does not move
//! the cursor, so every later call returns the same `Eof`.

use brisk_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use brisk_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::operators::{self, is_operator_byte};
use crate::{keywords, Cursor, SourceBuffer};

/// Single-pass tokenizer over one [`SourceBuffer`].
///
/// Owns its cursor; the buffer is only borrowed, so several scanners may
/// read the same buffer from different threads.
pub struct Scanner<'a, S> {
    cursor: Cursor<'a>,
    sink: S,
    errors: u32,
    warnings: u32,
    reached_eof: bool,
}

impl<'a, S: DiagnosticSink> Scanner<'a, S> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'a SourceBuffer, sink: S) -> Self {
        Scanner {
            cursor: source.cursor(),
            sink,
            errors: 0,
            warnings: 0,
            reached_eof: false,
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        loop {
            let start = self.cursor.pos();
            let kind = match self.cursor.current() {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.cursor.eat_while(is_whitespace);
                    continue;
                }
                0 if self.cursor.is_eof() => return self.eof(start),
                0 => {
                    self.embedded_nul(start);
                    self.cursor.advance();
                    continue;
                }

                b'(' => self.single(TokenKind::LeftParen),
                b')' => self.single(TokenKind::RightParen),
                b'{' => self.single(TokenKind::LeftBrace),
                b'}' => self.single(TokenKind::RightBrace),
                b'[' => self.single(TokenKind::LeftBracket),
                b']' => self.single(TokenKind::RightBracket),
                b'.' => self.single(TokenKind::Period),
                b',' => self.single(TokenKind::Comma),
                b';' => self.single(TokenKind::Semicolon),
                b':' => self.colon(),

                b'/' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    self.line_comment();
                    continue;
                }
                b if is_operator_byte(b) => self.operator_run(start),

                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
                b'$' => self.dollar_identifier(),
                b'0'..=b'9' => self.number(),

                _ => self.invalid_character(start),
            };
            return Token::new(kind, Span::new(start, self.cursor.pos()));
        }
    }

    /// Number of error diagnostics reported so far.
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    /// Number of warning diagnostics reported so far.
    pub fn warning_count(&self) -> u32 {
        self.warnings
    }

    /// Consume the scanner and return its diagnostic sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // === Sub-scanners ===

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `:` or `::`, never more than two.
    fn colon(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == b':' {
            self.cursor.advance();
            TokenKind::ColonColon
        } else {
            TokenKind::Colon
        }
    }

    /// Maximal run of operator bytes, classified as a whole.
    fn operator_run(&mut self, start: u32) -> TokenKind {
        self.cursor.eat_while(is_operator_byte);
        operators::classify(self.text_from(start))
    }

    fn identifier(&mut self, start: u32) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        keywords::lookup(self.text_from(start)).unwrap_or(TokenKind::Ident)
    }

    fn dollar_identifier(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        TokenKind::DollarIdent
    }

    fn number(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        TokenKind::NumericConstant
    }

    /// Skip a comment body, cursor just past `//`.
    ///
    /// Consumes through the first `\n` or `\r`. At end-of-input the cursor
    /// stays on the sentinel so the caller produces `Eof` next.
    fn line_comment(&mut self) {
        loop {
            match self.cursor.eat_until_line_end_or_nul() {
                b'\n' | b'\r' => {
                    self.cursor.advance();
                    return;
                }
                _ if self.cursor.is_eof() => {
                    // Points at the last byte of the comment; `//` guarantees one.
                    let at = self.cursor.pos() - 1;
                    trace!(offset = at, code = %ErrorCode::W0002, "unterminated line comment");
                    self.warn(
                        Diagnostic::warning(ErrorCode::W0002)
                            .with_message("no newline at end of line comment")
                            .with_label(Span::new(at, at + 1), ""),
                    );
                    return;
                }
                _ => {
                    let at = self.cursor.pos();
                    self.embedded_nul(at);
                    self.cursor.advance();
                }
            }
        }
    }

    /// One byte, one `Unknown`, one error. Multi-byte characters are not
    /// decoded.
    fn invalid_character(&mut self, start: u32) -> TokenKind {
        let byte = self.cursor.current();
        self.cursor.advance();
        trace!(offset = start, code = %ErrorCode::E0001, "invalid character");
        let mut diagnostic = Diagnostic::error(ErrorCode::E0001)
            .with_message("invalid character in source file")
            .with_label(Span::new(start, start + 1), "");
        if !byte.is_ascii() {
            diagnostic = diagnostic.with_note("non-ASCII bytes may only appear inside comments");
        }
        self.errors += 1;
        self.sink.emit(diagnostic);
        TokenKind::Unknown
    }

    // === Edge cases ===

    fn embedded_nul(&mut self, at: u32) {
        trace!(offset = at, code = %ErrorCode::W0001, "embedded nul");
        self.warn(
            Diagnostic::warning(ErrorCode::W0001)
                .with_message("nul character embedded in middle of file")
                .with_label(Span::new(at, at + 1), "treated as whitespace"),
        );
    }

    fn eof(&mut self, at: u32) -> Token {
        if !self.reached_eof {
            self.reached_eof = true;
            trace!(offset = at, "end of input");
        }
        Token::new(TokenKind::Eof, Span::point(at))
    }

    fn warn(&mut self, diagnostic: Diagnostic) {
        self.warnings += 1;
        self.sink.emit(diagnostic);
    }

    #[inline]
    fn text_from(&self, start: u32) -> &'a [u8] {
        self.cursor.slice_from(start)
    }
}

/// Yields tokens up to, not including, `Eof`.
impl<S: DiagnosticSink> Iterator for Scanner<'_, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, underscore and dollar sign.
/// The sentinel byte (0x00) maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[cfg(test)]
mod tests;

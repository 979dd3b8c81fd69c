#![allow(clippy::enum_glob_use, reason = "token kinds read better unqualified")]

use super::*;
use brisk_diagnostic::Severity;
use pretty_assertions::assert_eq;

use TokenKind::*;

/// Scan `source` to `Eof`, returning every token (including `Eof`) with its
/// text, and the diagnostics in report order.
fn scan(source: impl AsRef<[u8]>) -> (Vec<(TokenKind, String)>, Vec<Diagnostic>) {
    let buf = SourceBuffer::new("test.bk", source);
    let mut scanner = Scanner::new(&buf, Vec::new());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        let text = String::from_utf8_lossy(buf.text(tok.span)).into_owned();
        tokens.push((tok.kind, text));
        if tok.is_eof() {
            break;
        }
    }
    (tokens, scanner.into_sink())
}

fn kinds(source: impl AsRef<[u8]>) -> Vec<TokenKind> {
    scan(source).0.into_iter().map(|(kind, _)| kind).collect()
}

fn spans(source: impl AsRef<[u8]>) -> Vec<Span> {
    let buf = SourceBuffer::new("test.bk", source);
    let mut scanner = Scanner::new(&buf, Vec::new());
    let mut spans: Vec<Span> = scanner.by_ref().map(|t| t.span).collect();
    spans.push(scanner.next_token().span);
    spans
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<(ErrorCode, Option<Span>)> {
    diagnostics
        .iter()
        .map(|d| (d.code, d.primary_span()))
        .collect()
}

fn tok(kind: TokenKind, text: &str) -> (TokenKind, String) {
    (kind, text.to_string())
}

// === End of input ===

#[test]
fn empty_buffer_is_eof_immediately() {
    let buf = SourceBuffer::new("empty.bk", "");
    let mut scanner = Scanner::new(&buf, Vec::new());
    let first = scanner.next_token();
    assert_eq!(first, Token::new(Eof, Span::point(0)));
    assert!(scanner.into_sink().is_empty());
}

#[test]
fn eof_is_idempotent() {
    let buf = SourceBuffer::new("x.bk", "x");
    let mut scanner = Scanner::new(&buf, Vec::new());
    assert_eq!(scanner.next_token().kind, Ident);
    for _ in 0..5 {
        assert_eq!(scanner.next_token(), Token::new(Eof, Span::point(1)));
    }
}

#[test]
fn trailing_whitespace_then_eof() {
    assert_eq!(spans("a  \n\t\r"), vec![Span::new(0, 1), Span::point(6)]);
}

// === Reference scenario ===

#[test]
fn declaration_with_arrow_comment_and_dollar() {
    let (tokens, diags) = scan("var x->1 // hi\n$2");
    assert_eq!(
        tokens,
        vec![
            tok(Var, "var"),
            tok(Ident, "x"),
            tok(Arrow, "->"),
            tok(NumericConstant, "1"),
            tok(DollarIdent, "$2"),
            tok(Eof, ""),
        ]
    );
    assert!(diags.is_empty());
    assert_eq!(
        spans("var x->1 // hi\n$2"),
        vec![
            Span::new(0, 3),
            Span::new(4, 5),
            Span::new(5, 7),
            Span::new(7, 8),
            Span::new(15, 17),
            Span::point(17),
        ]
    );
}

// === Punctuation ===

#[test]
fn structural_singletons() {
    assert_eq!(
        kinds("( ) { } [ ] . , ;"),
        vec![
            LeftParen,
            RightParen,
            LeftBrace,
            RightBrace,
            LeftBracket,
            RightBracket,
            Period,
            Comma,
            Semicolon,
            Eof
        ]
    );
}

#[test]
fn singletons_do_not_merge() {
    assert_eq!(kinds("(("), vec![LeftParen, LeftParen, Eof]);
    assert_eq!(kinds(".."), vec![Period, Period, Eof]);
}

#[test]
fn colon_and_double_colon() {
    assert_eq!(kinds(":"), vec![Colon, Eof]);
    assert_eq!(kinds("::"), vec![ColonColon, Eof]);
    assert_eq!(kinds(": :"), vec![Colon, Colon, Eof]);
}

#[test]
fn triple_colon_is_double_then_single() {
    let (tokens, _) = scan(":::");
    assert_eq!(tokens, vec![tok(ColonColon, "::"), tok(Colon, ":"), tok(Eof, "")]);
}

// === Operators ===

#[test]
fn lone_equal_is_assignment() {
    assert_eq!(kinds("a = b"), vec![Ident, Equal, Ident, Eof]);
    assert_eq!(kinds("a=b"), vec![Ident, Equal, Ident, Eof]);
}

#[test]
fn arrow_only_as_exact_run() {
    assert_eq!(kinds("->"), vec![Arrow, Eof]);
    let (tokens, _) = scan("-->");
    assert_eq!(tokens, vec![tok(OperatorIdent, "-->"), tok(Eof, "")]);
    let (tokens, _) = scan("->=");
    assert_eq!(tokens, vec![tok(OperatorIdent, "->="), tok(Eof, "")]);
}

#[test]
fn operator_runs_are_maximal() {
    let (tokens, _) = scan("a <=> b == c !&|^%*+ d");
    assert_eq!(
        tokens,
        vec![
            tok(Ident, "a"),
            tok(OperatorIdent, "<=>"),
            tok(Ident, "b"),
            tok(OperatorIdent, "=="),
            tok(Ident, "c"),
            tok(OperatorIdent, "!&|^%*+"),
            tok(Ident, "d"),
            tok(Eof, ""),
        ]
    );
}

#[test]
fn lone_slash_is_operator() {
    assert_eq!(kinds("a / b"), vec![Ident, OperatorIdent, Ident, Eof]);
    assert_eq!(kinds("/ /"), vec![OperatorIdent, OperatorIdent, Eof]);
}

#[test]
fn slashes_inside_run_do_not_start_comment() {
    let (tokens, diags) = scan("+// x");
    assert_eq!(
        tokens,
        vec![tok(OperatorIdent, "+//"), tok(Ident, "x"), tok(Eof, "")]
    );
    assert!(diags.is_empty());
}

// === Identifiers and keywords ===

#[test]
fn every_keyword() {
    assert_eq!(
        kinds("typealias oneof struct func var __builtin_int32_type"),
        vec![Typealias, Oneof, Struct, Func, Var, BuiltinInt32Type, Eof]
    );
}

#[test]
fn keyword_match_is_exact() {
    assert_eq!(scan("structy").0, vec![tok(Ident, "structy"), tok(Eof, "")]);
    assert_eq!(kinds("structure"), vec![Ident, Eof]);
    assert_eq!(kinds("Struct"), vec![Ident, Eof]);
    assert_eq!(kinds("va"), vec![Ident, Eof]);
}

#[test]
fn identifiers_take_digits_underscores_and_dollars() {
    let (tokens, _) = scan("_x9 a$b var$");
    assert_eq!(
        tokens,
        vec![
            tok(Ident, "_x9"),
            tok(Ident, "a$b"),
            tok(Ident, "var$"),
            tok(Eof, ""),
        ]
    );
}

#[test]
fn dollar_identifiers() {
    let (tokens, _) = scan("$ $0 $a$b_1 $var");
    assert_eq!(
        tokens,
        vec![
            tok(DollarIdent, "$"),
            tok(DollarIdent, "$0"),
            tok(DollarIdent, "$a$b_1"),
            tok(DollarIdent, "$var"),
            tok(Eof, ""),
        ]
    );
}

// === Numbers ===

#[test]
fn integers_only() {
    let (tokens, _) = scan("42 1.5 12abc");
    assert_eq!(
        tokens,
        vec![
            tok(NumericConstant, "42"),
            tok(NumericConstant, "1"),
            tok(Period, "."),
            tok(NumericConstant, "5"),
            tok(NumericConstant, "12"),
            tok(Ident, "abc"),
            tok(Eof, ""),
        ]
    );
}

// === Comments ===

#[test]
fn comment_produces_no_token() {
    assert_eq!(kinds("// only a comment\n"), vec![Eof]);
    assert_eq!(kinds("a // b c\nd"), vec![Ident, Ident, Eof]);
}

#[test]
fn comment_ends_at_carriage_return() {
    let (tokens, diags) = scan("// a\rb");
    assert_eq!(tokens, vec![tok(Ident, "b"), tok(Eof, "")]);
    assert!(diags.is_empty());
}

#[test]
fn comment_at_end_of_input_warns() {
    let (tokens, diags) = scan("x // tail");
    assert_eq!(tokens, vec![tok(Ident, "x"), tok(Eof, "")]);
    assert_eq!(codes(&diags), vec![(ErrorCode::W0002, Some(Span::new(8, 9)))]);
    assert_eq!(diags[0].severity, Severity::Warning);
    assert_eq!(diags[0].message, "no newline at end of line comment");
}

#[test]
fn bare_comment_start_at_end_of_input() {
    let (tokens, diags) = scan("//");
    assert_eq!(tokens, vec![tok(Eof, "")]);
    assert_eq!(codes(&diags), vec![(ErrorCode::W0002, Some(Span::new(1, 2)))]);
}

#[test]
fn nul_inside_comment_warns_and_comment_continues() {
    let (tokens, diags) = scan(b"// a\0b\nc");
    assert_eq!(tokens, vec![tok(Ident, "c"), tok(Eof, "")]);
    assert_eq!(codes(&diags), vec![(ErrorCode::W0001, Some(Span::new(4, 5)))]);
}

// === Embedded NUL ===

#[test]
fn embedded_nul_is_whitespace_with_one_warning() {
    let (tokens, diags) = scan(b"a\0b");
    assert_eq!(tokens, vec![tok(Ident, "a"), tok(Ident, "b"), tok(Eof, "")]);
    assert_eq!(codes(&diags), vec![(ErrorCode::W0001, Some(Span::new(1, 2)))]);
    assert_eq!(diags[0].message, "nul character embedded in middle of file");
}

#[test]
fn nul_as_last_byte_is_still_content() {
    let (tokens, diags) = scan(b"a\0");
    assert_eq!(tokens, vec![tok(Ident, "a"), tok(Eof, "")]);
    assert_eq!(codes(&diags), vec![(ErrorCode::W0001, Some(Span::new(1, 2)))]);
    assert_eq!(spans(b"a\0").last(), Some(&Span::point(2)));
}

#[test]
fn nul_splits_tokens() {
    assert_eq!(kinds(b"var\0x"), vec![Var, Ident, Eof]);
    assert_eq!(kinds(b":\0:"), vec![Colon, Colon, Eof]);
}

// === Invalid characters ===

#[test]
fn invalid_ascii_character() {
    let (tokens, diags) = scan("a @ b");
    assert_eq!(
        tokens,
        vec![tok(Ident, "a"), tok(Unknown, "@"), tok(Ident, "b"), tok(Eof, "")]
    );
    assert_eq!(codes(&diags), vec![(ErrorCode::E0001, Some(Span::new(2, 3)))]);
    assert_eq!(diags[0].severity, Severity::Error);
    assert_eq!(diags[0].message, "invalid character in source file");
}

#[test]
fn invalid_characters_are_one_token_each() {
    assert_eq!(kinds("@@"), vec![Unknown, Unknown, Eof]);
    assert_eq!(kinds("#\"'`\\~?"), vec![Unknown; 7].into_iter().chain([Eof]).collect::<Vec<_>>());
}

#[test]
fn multibyte_character_is_one_unknown_per_byte() {
    assert_eq!(
        spans("\u{2603}x"),
        vec![
            Span::new(0, 1),
            Span::new(1, 2),
            Span::new(2, 3),
            Span::new(3, 4),
            Span::point(4),
        ]
    );
    let (tokens, diags) = scan("\u{e9}");
    let kinds: Vec<TokenKind> = tokens.into_iter().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, vec![Unknown, Unknown, Eof]);
    assert_eq!(
        codes(&diags),
        vec![
            (ErrorCode::E0001, Some(Span::new(0, 1))),
            (ErrorCode::E0001, Some(Span::new(1, 2))),
        ]
    );
}

#[test]
fn non_ascii_byte_error_carries_note() {
    let (_, diags) = scan("\u{e9}@");
    assert_eq!(diags.len(), 3);
    assert_eq!(diags[0].notes, vec!["non-ASCII bytes may only appear inside comments"]);
    assert_eq!(diags[1].notes.len(), 1);
    assert!(diags[2].notes.is_empty(), "ASCII errors have no note");
}

#[test]
fn malformed_utf8_is_one_byte_per_unknown() {
    assert_eq!(
        spans([0xFFu8, 0xE2, b'a']),
        vec![Span::new(0, 1), Span::new(1, 2), Span::new(2, 3), Span::point(3)]
    );
    assert_eq!(kinds([0xFFu8, 0xE2, b'a']), vec![Unknown, Unknown, Ident, Eof]);
}

// === Scanner API ===

#[test]
fn iterator_stops_before_eof() {
    let buf = SourceBuffer::new("it.bk", "a b");
    let scanner = Scanner::new(&buf, Vec::new());
    let kinds: Vec<TokenKind> = scanner.map(|t| t.kind).collect();
    assert_eq!(kinds, vec![Ident, Ident]);
}

#[test]
fn counts_diagnostics_by_severity() {
    let buf = SourceBuffer::new("c.bk", b"@ \0 // end");
    let mut scanner = Scanner::new(&buf, Vec::new());
    while !scanner.next_token().is_eof() {}
    assert_eq!(scanner.error_count(), 1);
    assert_eq!(scanner.warning_count(), 2);
    assert_eq!(scanner.into_sink().len(), 3);
}

#[test]
fn scanner_reports_into_borrowed_sink() {
    let buf = SourceBuffer::new("b.bk", "@");
    let mut diags: Vec<Diagnostic> = Vec::new();
    {
        let mut scanner = Scanner::new(&buf, &mut diags);
        assert_eq!(scanner.next_token().kind, Unknown);
    }
    assert_eq!(diags.len(), 1);
}

#[test]
fn ident_continue_table() {
    for b in 0..=255u8 {
        let expected = b.is_ascii_alphanumeric() || b == b'_' || b == b'$';
        assert_eq!(is_ident_continue(b), expected, "byte {b:#04x}");
    }
}

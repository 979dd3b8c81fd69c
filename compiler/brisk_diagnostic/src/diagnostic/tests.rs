use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("invalid character in source file")
        .with_label(Span::new(4, 5), "not valid here")
        .with_note("only ASCII punctuation is recognized");

    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.message, "invalid character in source file");
    assert_eq!(diag.labels, vec![Label::new(Span::new(4, 5), "not valid here")]);
    assert_eq!(diag.notes, vec!["only ASCII punctuation is recognized".to_string()]);
    assert!(diag.is_error());
}

#[test]
fn warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::W0001);
    assert_eq!(diag.severity, Severity::Warning);
    assert!(!diag.is_error());
}

#[test]
fn primary_span_is_first_label() {
    let diag = Diagnostic::warning(ErrorCode::W0002)
        .with_label(Span::new(8, 9), "comment ends here")
        .with_label(Span::new(0, 2), "comment starts here");
    assert_eq!(diag.primary_span(), Some(Span::new(8, 9)));
    assert_eq!(Diagnostic::error(ErrorCode::E0001).primary_span(), None);
}

#[test]
fn display_includes_code_and_location() {
    let diag = Diagnostic::warning(ErrorCode::W0001)
        .with_message("nul character embedded in middle of file")
        .with_label(Span::new(3, 4), "");
    assert_eq!(
        diag.to_string(),
        "warning[W0001]: nul character embedded in middle of file at 3..4"
    );
}

#[test]
fn severity_orders_errors_first() {
    assert!(Severity::Error < Severity::Warning);
    assert_eq!(Severity::Warning.to_string(), "warning");
}

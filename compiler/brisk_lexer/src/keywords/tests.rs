use super::*;

#[test]
fn every_keyword_resolves() {
    assert_eq!(lookup(b"typealias"), Some(TokenKind::Typealias));
    assert_eq!(lookup(b"oneof"), Some(TokenKind::Oneof));
    assert_eq!(lookup(b"struct"), Some(TokenKind::Struct));
    assert_eq!(lookup(b"func"), Some(TokenKind::Func));
    assert_eq!(lookup(b"var"), Some(TokenKind::Var));
    assert_eq!(
        lookup(b"__builtin_int32_type"),
        Some(TokenKind::BuiltinInt32Type)
    );
}

#[test]
fn table_is_sorted_and_unique() {
    for pair in KEYWORDS.windows(2) {
        assert!(pair[0].0 < pair[1].0, "{:?} !< {:?}", pair[0].0, pair[1].0);
    }
}

#[test]
fn length_bounds_match_table() {
    let min = KEYWORDS.iter().map(|(kw, _)| kw.len()).min();
    let max = KEYWORDS.iter().map(|(kw, _)| kw.len()).max();
    assert_eq!(min, Some(MIN_LEN));
    assert_eq!(max, Some(MAX_LEN));
}

#[test]
fn table_kinds_are_keywords() {
    for (text, kind) in KEYWORDS {
        assert!(kind.is_keyword(), "{kind:?}");
        assert_eq!(kind.fixed_text().map(str::as_bytes), Some(text));
    }
}

#[test]
fn no_prefix_or_extension_matches() {
    assert_eq!(lookup(b"structure"), None);
    assert_eq!(lookup(b"structy"), None);
    assert_eq!(lookup(b"stru"), None);
    assert_eq!(lookup(b"variable"), None);
    assert_eq!(lookup(b"va"), None);
}

#[test]
fn case_sensitive() {
    assert_eq!(lookup(b"Struct"), None);
    assert_eq!(lookup(b"VAR"), None);
    assert_eq!(lookup(b"Func"), None);
}

#[test]
fn non_keywords() {
    assert_eq!(lookup(b""), None);
    assert_eq!(lookup(b"x"), None);
    assert_eq!(lookup(b"__builtin_int64_type"), None);
}

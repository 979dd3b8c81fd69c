use super::*;

#[test]
fn single_line() {
    let source = b"var x";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), b"var x");
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 4), (1, 5));
    assert_eq!(table.offset_to_line_col(source, 5), (1, 6));
}

#[test]
fn multiple_lines() {
    let source = b"a\nbc\n\ndef";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 4), b"def");
    assert_eq!(table.offset_to_line_col(source, 1), (1, 2)); // the '\n'
    assert_eq!(table.offset_to_line_col(source, 2), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 5), (3, 1));
    assert_eq!(table.offset_to_line_col(source, 8), (4, 3));
}

#[test]
fn trailing_newline_opens_empty_line() {
    let source = b"x\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 2), (2, 1));
    assert_eq!(table.line_text(source, 2), b"");
}

#[test]
fn columns_count_characters_not_bytes() {
    let source = "é€x".as_bytes();
    let table = LineOffsetTable::build(source);
    // 'é' is 2 bytes, '€' is 3 bytes.
    assert_eq!(table.offset_to_line_col(source, 2), (1, 2));
    assert_eq!(table.offset_to_line_col(source, 5), (1, 3));
}

#[test]
fn offset_past_end_clamps() {
    let source = b"ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 99), (1, 3));
}

#[test]
fn line_text_strips_terminators() {
    let source = b"first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), b"first");
    assert_eq!(table.line_text(source, 2), b"second");
    assert_eq!(table.line_text(source, 3), b"third");
}

#[test]
fn line_start_for_each_line() {
    let source = b"a\nbb\nccc";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_start(1), 0);
    assert_eq!(table.line_start(2), 2);
    assert_eq!(table.line_start(3), 5);
}

#[test]
fn empty_source() {
    let table = LineOffsetTable::build(b"");
    assert_eq!(table.offset_to_line_col(b"", 0), (1, 1));
    assert_eq!(table.line_text(b"", 1), b"");
}

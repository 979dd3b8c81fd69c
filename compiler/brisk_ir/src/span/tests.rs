use super::*;

#[test]
fn basic_accessors() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
    assert_eq!(span.to_range(), 7..7);
}

#[test]
fn to_range_round_trips_offsets() {
    let span = Span::new(4, 12);
    assert_eq!(span.to_range(), 4..12);
    assert_eq!(&"0123456789abcdef"[span.to_range()], "456789ab");
}

#[test]
fn display_and_debug_agree() {
    let span = Span::new(1, 5);
    assert_eq!(format!("{span}"), "1..5");
    assert_eq!(format!("{span:?}"), "1..5");
}

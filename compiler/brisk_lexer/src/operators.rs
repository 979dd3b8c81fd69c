//! Operator characters and reserved operator spellings.
//!
//! The punctuation sub-scanner consumes a maximal run of operator bytes and
//! classifies the whole run here. Adding a reserved operator means adding a
//! row to [`RESERVED_OPERATORS`]; consumption does not change.

use brisk_ir::TokenKind;

/// Operator runs with a dedicated kind. Matched against the full run only,
/// so `-->` is not `->` followed by anything.
pub(crate) const RESERVED_OPERATORS: [(&[u8], TokenKind); 2] =
    [(b"=", TokenKind::Equal), (b"->", TokenKind::Arrow)];

/// 256-byte lookup table for the operator charset `/ = - + * % < > ! & | ^`.
/// The sentinel byte (0x00) maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_OPERATOR_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'/' | b'=' | b'-' | b'+' | b'*' | b'%' | b'<' | b'>' | b'!' | b'&' | b'|' | b'^'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` belongs to the operator charset.
#[inline]
pub(crate) fn is_operator_byte(b: u8) -> bool {
    IS_OPERATOR_TABLE[b as usize]
}

/// Classify a complete operator run.
#[inline]
pub(crate) fn classify(run: &[u8]) -> TokenKind {
    RESERVED_OPERATORS
        .iter()
        .find(|&&(text, _)| text == run)
        .map_or(TokenKind::OperatorIdent, |&(_, kind)| kind)
}

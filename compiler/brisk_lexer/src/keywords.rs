//! Reserved-word lookup.
//!
//! Keywords are matched against the full identifier run, case-sensitively
//! and by exact length: `structy` and `Struct` are identifiers.

use brisk_ir::TokenKind;

/// Sorted list of reserved words and their corresponding `TokenKind`.
///
/// Sorted bytewise for binary search (`_` sorts before lowercase letters).
pub(crate) const KEYWORDS: [(&[u8], TokenKind); 6] = [
    (b"__builtin_int32_type", TokenKind::BuiltinInt32Type),
    (b"func", TokenKind::Func),
    (b"oneof", TokenKind::Oneof),
    (b"struct", TokenKind::Struct),
    (b"typealias", TokenKind::Typealias),
    (b"var", TokenKind::Var),
];

/// Shortest and longest keyword, for a cheap length pre-filter.
const MIN_LEN: usize = 3;
const MAX_LEN: usize = 20;

/// Look up a reserved word by its exact bytes.
#[inline]
pub(crate) fn lookup(text: &[u8]) -> Option<TokenKind> {
    if !(MIN_LEN..=MAX_LEN).contains(&text.len()) {
        return None;
    }
    KEYWORDS
        .binary_search_by_key(&text, |&(kw, _)| kw)
        .ok()
        .map(|idx| KEYWORDS[idx].1)
}

#[cfg(test)]
mod tests;

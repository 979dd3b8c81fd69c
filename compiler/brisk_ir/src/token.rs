//! Token types produced by the Brisk scanner.
//!
//! A [`Token`] is a `(kind, span)` pair. The span points into the source
//! buffer; token text is recovered by slicing that buffer, never copied.

use std::fmt;

use crate::Span;

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Returns `true` if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// The closed set of token kinds.
///
/// Discriminants are grouped by category so a `u8` tag is enough to
/// dispatch on:
/// - 0-1: control (`Eof`, `Unknown`)
/// - 16-26: punctuation
/// - 32-35: names and literals
/// - 64-69: reserved words
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Control ===
    /// End of input. Always has an empty span at the buffer end.
    Eof = 0,
    /// A character the scanner could not classify.
    Unknown = 1,

    // === Punctuation ===
    /// `(`
    LeftParen = 16,
    /// `)`
    RightParen = 17,
    /// `{`
    LeftBrace = 18,
    /// `}`
    RightBrace = 19,
    /// `[`
    LeftBracket = 20,
    /// `]`
    RightBracket = 21,
    /// `.`
    Period = 22,
    /// `,`
    Comma = 23,
    /// `;`
    Semicolon = 24,
    /// `:`
    Colon = 25,
    /// `::`
    ColonColon = 26,
    /// `=` on its own (assignment).
    Equal = 27,
    /// `->` on its own.
    Arrow = 28,

    // === Names & literals ===
    /// `[A-Za-z_][A-Za-z0-9_$]*` that is not a reserved word.
    Ident = 32,
    /// A run of operator characters that is not a reserved operator.
    OperatorIdent = 33,
    /// `$[A-Za-z0-9_$]*`
    DollarIdent = 34,
    /// `[0-9]+`
    NumericConstant = 35,

    // === Reserved words ===
    /// `typealias`
    Typealias = 64,
    /// `oneof`
    Oneof = 65,
    /// `struct`
    Struct = 66,
    /// `func`
    Func = 67,
    /// `var`
    Var = 68,
    /// `__builtin_int32_type`
    BuiltinInt32Type = 69,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 25] = [
        TokenKind::Eof,
        TokenKind::Unknown,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Period,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::ColonColon,
        TokenKind::Equal,
        TokenKind::Arrow,
        TokenKind::Ident,
        TokenKind::OperatorIdent,
        TokenKind::DollarIdent,
        TokenKind::NumericConstant,
        TokenKind::Typealias,
        TokenKind::Oneof,
        TokenKind::Struct,
        TokenKind::Func,
        TokenKind::Var,
        TokenKind::BuiltinInt32Type,
    ];

    /// The `u8` tag of this kind.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Returns `true` for reserved-word kinds.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.tag() >= 64
    }

    /// Returns `true` for kinds whose text is always the same.
    ///
    /// Identifiers, literals, `Unknown` and `Eof` have variable (or no) text.
    pub const fn is_fixed(self) -> bool {
        self.fixed_text().is_some()
    }

    /// The exact source text of fixed-text kinds, `None` otherwise.
    pub const fn fixed_text(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBrace => Some("{"),
            TokenKind::RightBrace => Some("}"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::Period => Some("."),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Colon => Some(":"),
            TokenKind::ColonColon => Some("::"),
            TokenKind::Equal => Some("="),
            TokenKind::Arrow => Some("->"),
            TokenKind::Typealias => Some("typealias"),
            TokenKind::Oneof => Some("oneof"),
            TokenKind::Struct => Some("struct"),
            TokenKind::Func => Some("func"),
            TokenKind::Var => Some("var"),
            TokenKind::BuiltinInt32Type => Some("__builtin_int32_type"),
            TokenKind::Eof
            | TokenKind::Unknown
            | TokenKind::Ident
            | TokenKind::OperatorIdent
            | TokenKind::DollarIdent
            | TokenKind::NumericConstant => None,
        }
    }

    /// Short human-readable name, used in token dumps and parser messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Unknown => "unknown",
            TokenKind::LeftParen => "l_paren",
            TokenKind::RightParen => "r_paren",
            TokenKind::LeftBrace => "l_brace",
            TokenKind::RightBrace => "r_brace",
            TokenKind::LeftBracket => "l_square",
            TokenKind::RightBracket => "r_square",
            TokenKind::Period => "period",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semi",
            TokenKind::Colon => "colon",
            TokenKind::ColonColon => "coloncolon",
            TokenKind::Equal => "equal",
            TokenKind::Arrow => "arrow",
            TokenKind::Ident => "identifier",
            TokenKind::OperatorIdent => "oper_identifier",
            TokenKind::DollarIdent => "dollarident",
            TokenKind::NumericConstant => "numeric_constant",
            TokenKind::Typealias => "kw_typealias",
            TokenKind::Oneof => "kw_oneof",
            TokenKind::Struct => "kw_struct",
            TokenKind::Func => "kw_func",
            TokenKind::Var => "kw_var",
            TokenKind::BuiltinInt32Type => "kw___builtin_int32_type",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An ordered list of tokens, always terminated by exactly one `Eof`.
///
/// Built by pushing tokens in scan order; [`TokenList::push`] ignores any
/// token after the first `Eof`, so the terminal token is unique.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a token. Tokens pushed after `Eof` are dropped.
    pub fn push(&mut self, token: Token) {
        if !self.is_terminated() {
            self.tokens.push(token);
        }
    }

    /// Returns `true` once an `Eof` token has been pushed.
    pub fn is_terminated(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_eof)
    }

    /// Number of tokens, including the final `Eof`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no token was pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds in scan order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(Token, 12);
}

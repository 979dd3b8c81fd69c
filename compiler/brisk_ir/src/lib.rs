//! Brisk IR - shared front-end vocabulary.
//!
//! This crate holds the small value types every front-end phase agrees on:
//! - [`Span`] for byte ranges in a source buffer
//! - [`Token`], [`TokenKind`] and [`TokenList`] for lexer output
//!
//! Everything here is plain data: `Copy` where possible, no interior
//! mutability, no global state. Diagnostics and scanning live in
//! `brisk_diagnostic` and `brisk_lexer`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

//! Forward-only cursor over a sentinel-terminated buffer.
//!
//! The cursor is an index into the buffer, never a pointer. End-of-input is
//! the sentinel `0x00` at `source_len`; a `0x00` before that is an embedded
//! NUL and [`Cursor::is_eof`] tells the two apart.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00` padding, and
/// `pos <= source_len` at all times. Advancing methods never step past the
/// sentinel.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// `buf[source_len]` must be the sentinel, with at least one padding
    /// byte after it; `SourceBuffer::new()` guarantees both.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 1 < buf.len(),
            "sentinel and one padding byte must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Cursor {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at end-of-input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding back it.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance by one byte. A no-op at end-of-input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance by `n` bytes, stopping at end-of-input.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns `true` at the true end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// The source bytes from `start` up to the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} exceeds {}", self.pos);
        &self.buf[start as usize..self.pos as usize]
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Stops at end-of-input regardless of `pred(0)`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.source_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n`, `\r` or `0x00` in the source and return it.
    ///
    /// The cursor stops *on* the found byte. When none remains, the cursor
    /// moves to end-of-input and `0x00` is returned; use
    /// [`is_eof`](Self::is_eof) to tell that from an embedded NUL.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_end_or_nul(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr3(b'\n', b'\r', 0, remaining) {
            self.pos += offset as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }
}

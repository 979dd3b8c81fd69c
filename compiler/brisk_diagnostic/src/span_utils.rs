//! Line and column lookup for diagnostic rendering.
//!
//! Source buffers are raw bytes and may not be valid UTF-8, so everything
//! here works on `&[u8]`. Lines are `\n`-terminated; a `\r` before the
//! `\n` stays part of the line text and is trimmed only for display.

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use brisk_diagnostic::span_utils::LineOffsetTable;
///
/// let source = b"line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source buffers are limited to u32::MAX bytes"
    )]
    pub fn build(source: &[u8]) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(memchr::memchr_iter(b'\n', source).map(|i| (i + 1) as u32));
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset using binary search.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count never exceeds the u32 byte count"
    )]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (line_idx as u32) + 1
    }

    /// Get 1-based `(line, column)` from a byte offset.
    ///
    /// The column counts characters, not bytes: UTF-8 continuation bytes do
    /// not advance it. Offsets past the end clamp to the source length.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "column count is bounded by the u32 byte count"
    )]
    pub fn offset_to_line_col(&self, source: &[u8], offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start(line) as usize;
        let end = (offset as usize).min(source.len()).max(line_start);
        let col = source[line_start..end]
            .iter()
            .filter(|&&b| !is_utf8_continuation(b))
            .count();
        (line, col as u32 + 1)
    }

    /// Byte offset where the 1-based `line` starts.
    pub fn line_start(&self, line: u32) -> u32 {
        let idx = (line.max(1) - 1) as usize;
        self.offsets.get(idx).copied().unwrap_or(0)
    }

    /// The text of the 1-based `line`, without its line terminator.
    pub fn line_text<'s>(&self, source: &'s [u8], line: u32) -> &'s [u8] {
        let start = (self.line_start(line) as usize).min(source.len());
        let end = self
            .offsets
            .get(line as usize)
            .map_or(source.len(), |&next| (next as usize).saturating_sub(1))
            .max(start)
            .min(source.len());
        let text = &source[start..end];
        text.strip_suffix(b"\r").unwrap_or(text)
    }
}

#[inline]
fn is_utf8_continuation(b: u8) -> bool {
    (0x80..0xC0).contains(&b)
}

#[cfg(test)]
mod tests;

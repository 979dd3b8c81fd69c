//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end-of-input by reading a byte rather than by
//! comparing against a length on every step. A `0x00` *inside* the content
//! is ordinary input; only the one at [`SourceBuffer::len`] is the end.
//!
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also gives [`Cursor::peek`](crate::Cursor::peek) safe padding to read
//! from at the very end.

use std::path::Path;

use brisk_ir::Span;

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Errors from loading a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be read.
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Offsets are `u32`, so larger sources cannot be addressed.
    #[error("`{path}` is {len} bytes; sources are limited to {} bytes", u32::MAX)]
    TooLarge { path: String, len: u64 },
}

/// A named, immutable, sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Display name, usually the path the source was read from.
    name: String,
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a buffer from in-memory bytes.
    ///
    /// Content beyond `u32::MAX` bytes is not addressable and is dropped;
    /// [`from_file`](Self::from_file) rejects such files up front.
    pub fn new(name: impl Into<String>, source: impl AsRef<[u8]>) -> Self {
        let bytes = source.as_ref();
        let source_len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
        let content = &bytes[..source_len as usize];

        // Round up to next 64-byte boundary (minimum: source + sentinel + one
        // byte for `peek()` at end-of-input).
        let padded_len = (content.len() + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..content.len()].copy_from_slice(content);

        SourceBuffer {
            name: name.into(),
            buf,
            source_len,
        }
    }

    /// Read a source file. The buffer is named after `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: display.clone(),
            source,
        })?;
        if u32::try_from(bytes.len()).is_err() {
            return Err(SourceError::TooLarge {
                path: display,
                len: bytes.len() as u64,
            });
        }
        Ok(SourceBuffer::new(display, bytes))
    }

    /// Display name of this source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// The source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The bytes a span covers, clamped to the source content.
    pub fn text(&self, span: Span) -> &[u8] {
        let end = (span.end as usize).min(self.source_len as usize);
        let start = (span.start as usize).min(end);
        &self.buf[start..end]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }
}

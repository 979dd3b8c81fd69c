//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limit so a badly broken file does not flood the terminal
//! - Deduplication of repeated diagnostics at the same location
//! - Position-sorted output on [`DiagnosticQueue::flush`]
//!
//! Filtering only affects what is stored. Producers are never told to stop,
//! so a scan over a file with a thousand invalid characters still produces
//! a complete token stream.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use brisk_ir::Span;

use crate::{Diagnostic, ErrorCode};

/// Number of characters to use for message prefix deduplication.
const MESSAGE_PREFIX_LEN: usize = 30;

/// Hash the first N characters of a message for dedup comparison.
#[inline]
fn message_prefix_hash(msg: &str) -> u64 {
    let byte_end = msg
        .char_indices()
        .nth(MESSAGE_PREFIX_LEN)
        .map_or(msg.len(), |(idx, _)| idx);
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    msg[..byte_end].hash(&mut hasher);
    hasher.finish()
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors to keep (0 = unlimited). Warnings are not
    /// limited.
    pub error_limit: usize,
    /// Drop diagnostics with the same code, location and message prefix as
    /// one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

/// Queued diagnostic with metadata for sorting.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    /// Byte offset of the primary span; `u32::MAX` when there is none, so
    /// location-less diagnostics sort last.
    offset: u32,
}

/// Key identifying "the same diagnostic" for deduplication.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
struct DedupKey {
    code: ErrorCode,
    span: Option<Span>,
    message: u64,
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default());
/// queue.add(diagnostic);
/// // ... add more diagnostics
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticQueue {
    diagnostics: Vec<QueuedDiagnostic>,
    seen: HashSet<DedupKey>,
    error_count: usize,
    warning_count: usize,
    /// Errors dropped because the limit was reached.
    suppressed_count: usize,
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            seen: HashSet::new(),
            error_count: 0,
            warning_count: 0,
            suppressed_count: 0,
            config,
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was stored, `false` if it was
    /// filtered (duplicate, or an error past the limit).
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();

        if is_error && self.limit_reached() {
            self.suppressed_count += 1;
            return false;
        }

        let span = diag.primary_span();
        if self.config.deduplicate {
            let key = DedupKey {
                code: diag.code,
                span,
                message: message_prefix_hash(&diag.message),
            };
            if !self.seen.insert(key) {
                return false;
            }
        }

        if is_error {
            self.error_count += 1;
        } else {
            self.warning_count += 1;
        }

        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            offset: span.map_or(u32::MAX, |s| s.start),
        });
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Number of errors stored.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of warnings stored.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Number of errors dropped because the limit was reached.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed_count
    }

    /// Sort diagnostics by position and return them.
    ///
    /// The sort is stable, so diagnostics at the same offset keep their
    /// report order. Clears the queue, including counters.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| w[0].offset <= w[1].offset);

        if !already_sorted {
            self.diagnostics.sort_by_key(|d| d.offset);
        }

        let result: Vec<Diagnostic> = self.diagnostics.drain(..).map(|d| d.diagnostic).collect();

        self.seen.clear();
        self.error_count = 0;
        self.warning_count = 0;
        self.suppressed_count = 0;

        result
    }
}

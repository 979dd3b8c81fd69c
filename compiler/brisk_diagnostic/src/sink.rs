//! The diagnostics channel between producers and collectors.

use crate::{Diagnostic, DiagnosticQueue};

/// Receives diagnostics as they are produced.
///
/// Emission is fire-and-forget: a sink may store, count, filter or drop a
/// diagnostic, but it never signals the producer to stop. Producers report
/// and carry on.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    fn report_twice(mut sink: impl DiagnosticSink) {
        sink.emit(Diagnostic::warning(ErrorCode::W0001));
        sink.emit(Diagnostic::error(ErrorCode::E0001));
    }

    #[test]
    fn vec_sink_keeps_order() {
        let mut diags = Vec::new();
        report_twice(&mut diags);
        let codes: Vec<ErrorCode> = diags.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![ErrorCode::W0001, ErrorCode::E0001]);
    }

    #[test]
    fn queue_sink_counts() {
        let mut queue = DiagnosticQueue::new();
        report_twice(&mut queue);
        assert_eq!(queue.error_count(), 1);
        assert_eq!(queue.warning_count(), 1);
    }

    #[test]
    fn dyn_sink_through_reference() {
        let mut diags: Vec<Diagnostic> = Vec::new();
        {
            let sink: &mut dyn DiagnosticSink = &mut diags;
            report_twice(sink);
        }
        assert_eq!(diags.len(), 2);
    }
}

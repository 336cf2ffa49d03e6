//! Side channel for non-fatal parse diagnostics.
//!
//! An unparseable numeric token never fails its line; the field becomes
//! missing and one [`Diagnostic`] describes what was rejected. The parser
//! reports through a caller-supplied [`DiagnosticSink`] so the parsing core
//! stays free of presentation concerns and is testable on its own: tests
//! collect into a `Vec<Diagnostic>`, the CLI forwards to the log via
//! [`LogSink`].

use std::fmt;

/// One advisory message about a field token that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the column the token came from ("duration", "year", "score").
    pub field: &'static str,
    /// The raw offending token, verbatim.
    pub token: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to parse {}: '{}'", self.field, self.token)
    }
}

/// Receiver for parse diagnostics.
///
/// Implementations must not fail; diagnostics are advisory and may never
/// interrupt ingestion of subsequent lines.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Returned-log-list style sink: keeps every diagnostic for later inspection.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that forwards every diagnostic to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            field = diagnostic.field,
            token = %diagnostic.token,
            "{diagnostic}"
        );
    }
}

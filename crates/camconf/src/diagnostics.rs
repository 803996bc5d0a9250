//! Diagnostic sinks for configuration problems found at startup.

/// Receives human-readable warnings about missing or invalid collaborators.
pub trait DiagnosticSink {
    /// Reports a warning.
    fn warn(&mut self, message: &str);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, message: &str) {
        log::warn!("{message}");
    }
}

/// Keeps diagnostics in memory, for hosts that show them in their own UI.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    /// Messages in the order they were reported.
    pub messages: Vec<String>,
}

impl DiagnosticSink for CollectingSink {
    fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

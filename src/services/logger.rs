use serde_json::Value;

/// Logging capability injected into the scoring client and intake boundary.
///
/// Each call takes a message plus a JSON object of context fields.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, context: Value);
    fn info(&self, message: &str, context: Value);
    fn warn(&self, message: &str, context: Value);
    fn error(&self, message: &str, context: Value);
}

/// Forwards to `tracing` events; context is attached as a single field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str, context: Value) {
        tracing::debug!(context = %context, "{}", message);
    }

    fn info(&self, message: &str, context: Value) {
        tracing::info!(context = %context, "{}", message);
    }

    fn warn(&self, message: &str, context: Value) {
        tracing::warn!(context = %context, "{}", message);
    }

    fn error(&self, message: &str, context: Value) {
        tracing::error!(context = %context, "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str, _context: Value) {}
    fn info(&self, _message: &str, _context: Value) {}
    fn warn(&self, _message: &str, _context: Value) {}
    fn error(&self, _message: &str, _context: Value) {}
}

// ABOUTME: Injectable logging capability for the handler boundary.
// ABOUTME: NoopLogger is the default; TracingLogger emits through the tracing crate.

/// Best-effort logging side-channel supplied by the host.
///
/// Logging never affects the returned result; implementations must not panic.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Logger that forwards to the `tracing` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

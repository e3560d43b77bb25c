/// Logger port - provides logging capabilities across platforms.
///
/// - WASM: Console API (console.log, console.error, etc.)
/// - Native: the `log` crate facade
pub trait LoggerPort: Send + Sync {
    /// Log an informational message.
    fn log(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);

    /// Log a warning message.
    fn warn(&self, message: &str);

    /// Log a diagnostic message, only emitted in debug mode by callers.
    fn debug(&self, message: &str);
}

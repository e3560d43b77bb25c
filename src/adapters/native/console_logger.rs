use crate::ports::LoggerPort;

/// Native logger forwarding to the `log` facade.
///
/// The binary embedding this crate picks the backend (env_logger etc.).
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }
}

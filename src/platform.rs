/// Platform - holds the ambient ports shared by every entry point.
///
/// DOM-bound ports (document, signals, sink, http, navigation) are built per
/// call by the facades and passed explicitly; only stateless ports live here.

use crate::ports::LoggerPort;

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
        }
    }

    pub fn with_logger(logger: &'static dyn LoggerPort) -> Self {
        Self { logger }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

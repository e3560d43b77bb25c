/// Global logger instance - selects the implementation from the build target.
///
/// WASM builds log to the browser console, native builds go through `log`.

use crate::ports::LoggerPort;
use once_cell::sync::Lazy;

use super::ConsoleLogger;

pub static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}

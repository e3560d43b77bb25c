/// Adapters module - platform-specific implementations of ports.
///
/// `native` holds the in-memory adapters and builds on every target;
/// `wasm` needs a browser.

pub mod global_logger;
pub mod native;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::ConsoleLogger;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ConsoleLogger;

pub use global_logger::logger;

/// Ports module - capability traits that keep the domain free of browser APIs.
///
/// Each trait has a browser adapter (`adapters::wasm`) and an in-memory
/// adapter (`adapters::native`) used off-browser and in tests.

pub mod document;
pub mod http;
pub mod logger;
pub mod navigation;
pub mod signals;
pub mod sink;

pub use document::DocumentPort;
pub use http::HttpPort;
pub use logger::LoggerPort;
pub use navigation::NavigationPort;
pub use signals::{ChangeCallback, ChangeSignalPort};
pub use sink::MessageSinkPort;

/// WASM adapters - implementations using browser APIs.

pub mod console_logger;
pub mod dom_document;
pub mod dom_signals;
pub mod error_conversions;
pub mod fetch_http;
pub mod navigation;
pub mod parent_sink;

pub use console_logger::ConsoleLogger;
pub use dom_document::DomDocument;
pub use dom_signals::DomChangeSignals;
pub use fetch_http::FetchHttp;
pub use navigation::WindowNavigation;
pub use parent_sink::ParentWindowSink;

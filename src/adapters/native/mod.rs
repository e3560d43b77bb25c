/// Native adapters - in-memory implementations for non-browser builds.
///
/// Nothing here touches a real document: sizes are set by hand, signals are
/// fired by hand and outgoing messages are recorded.

pub mod canned_http;
pub mod console_logger;
pub mod fixed_document;
pub mod manual_signals;
pub mod recording_logger;
pub mod recording_navigation;
pub mod recording_sink;

pub use canned_http::CannedHttp;
pub use console_logger::ConsoleLogger;
pub use fixed_document::FixedDocument;
pub use manual_signals::ManualSignals;
pub use recording_logger::RecordingLogger;
pub use recording_navigation::RecordingNavigation;
pub use recording_sink::RecordingSink;

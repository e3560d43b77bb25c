pub mod operations;
pub mod types;

pub use operations::{accept_late_submission, download_report};
pub use types::{decode_body, ActionOutcome, ReportLink};

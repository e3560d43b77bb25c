use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Reloaded,
    Redirected(String),
    Failed,
}

/// Body returned by the report handler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportLink {
    pub download_url: String,
}

/// Handlers may answer with nothing, JSON, or plain text.
pub fn decode_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

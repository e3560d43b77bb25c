use serde::Deserialize;

pub const DEFAULT_CONTENT_ELEMENT_ID: &str = "content";
pub const DEFAULT_BODY_CLASS: &str = "view-in-mfe";
pub const DEFAULT_LATE_SUBMISSION_SELECTOR: &str = "#late_submission";
pub const DEFAULT_REPORT_SELECTOR: &str = "#download_report";

/// Options accepted by the resize relay.
///
/// `embedded` overrides detection when set; leave it out to compare the
/// window against its parent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameConfig {
    pub content_element_id: String,
    pub body_class: String,
    pub embedded: Option<bool>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            content_element_id: DEFAULT_CONTENT_ELEMENT_ID.to_string(),
            body_class: DEFAULT_BODY_CLASS.to_string(),
            embedded: None,
        }
    }
}

/// Handler URLs and button selectors for the grading actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionsConfig {
    pub late_submission_url: Option<String>,
    pub report_url: Option<String>,
    pub late_submission_selector: String,
    pub report_selector: String,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            late_submission_url: None,
            report_url: None,
            late_submission_selector: DEFAULT_LATE_SUBMISSION_SELECTOR.to_string(),
            report_selector: DEFAULT_REPORT_SELECTOR.to_string(),
        }
    }
}

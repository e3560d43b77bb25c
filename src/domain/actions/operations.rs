use super::types::{ActionOutcome, ReportLink};
use crate::domain::error::FrameError;
use crate::ports::{HttpPort, LoggerPort, NavigationPort};
use serde_json::json;

pub const LATE_SUBMISSION_FAILURE: &str = "Error to accept late submission";
pub const REPORT_FAILURE: &str = "Error to download report";

/// Accepts a late submission and reloads the page so the new state renders.
pub async fn accept_late_submission(
    http: &dyn HttpPort,
    navigation: &dyn NavigationPort,
    logger: &dyn LoggerPort,
    url: &str,
) -> ActionOutcome {
    let result = post_then_reload(http, navigation, url).await;

    match result {
        Ok(()) => ActionOutcome::Reloaded,
        Err(e) => {
            logger.error(&format!("{}: {}", LATE_SUBMISSION_FAILURE, e));
            ActionOutcome::Failed
        }
    }
}

/// Asks the handler for a CSV export and navigates to the returned link.
pub async fn download_report(
    http: &dyn HttpPort,
    navigation: &dyn NavigationPort,
    logger: &dyn LoggerPort,
    url: &str,
) -> ActionOutcome {
    let result = fetch_report_link(http, navigation, url).await;

    match result {
        Ok(download_url) => ActionOutcome::Redirected(download_url),
        Err(e) => {
            logger.error(&format!("{}: {}", REPORT_FAILURE, e));
            ActionOutcome::Failed
        }
    }
}

async fn post_then_reload(
    http: &dyn HttpPort,
    navigation: &dyn NavigationPort,
    url: &str,
) -> Result<(), FrameError> {
    http.post_json(url, &json!({})).await?;
    navigation.reload()
}

async fn fetch_report_link(
    http: &dyn HttpPort,
    navigation: &dyn NavigationPort,
    url: &str,
) -> Result<String, FrameError> {
    let response = http.post_json(url, &json!({})).await?;
    let link: ReportLink = serde_json::from_value(response)
        .map_err(|e| FrameError::invalid_response(e.to_string()))?;
    navigation.assign(&link.download_url)?;
    Ok(link.download_url)
}

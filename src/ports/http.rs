use crate::domain::error::FrameError;
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait HttpPort {
    /// POST `body` as JSON and return the decoded response body.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, FrameError>;
}

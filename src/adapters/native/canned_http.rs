use crate::domain::error::FrameError;
use crate::ports::HttpPort;
use async_trait::async_trait;
use std::cell::RefCell;

/// HTTP client that answers every request with the same canned result.
pub struct CannedHttp {
    response: Result<serde_json::Value, FrameError>,
    requests: RefCell<Vec<(String, serde_json::Value)>>,
}

impl CannedHttp {
    pub fn responding(body: serde_json::Value) -> Self {
        Self {
            response: Ok(body),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: FrameError) -> Self {
        Self {
            response: Err(error),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpPort for CannedHttp {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, FrameError> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), body.clone()));
        self.response.clone()
    }
}

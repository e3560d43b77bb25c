use crate::domain::actions::decode_body;
use crate::domain::error::FrameError;
use crate::ports::HttpPort;
use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Window};

/// `fetch` based client for XBlock JSON handlers.
pub struct FetchHttp {
    window: Window,
}

impl FetchHttp {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

#[async_trait(?Send)]
impl HttpPort for FetchHttp {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, FrameError> {
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body.to_string()));

        let request = Request::new_with_str_and_init(url, &init)?;
        request.headers().set("Content-Type", "application/json")?;

        let response: Response = JsFuture::from(self.window.fetch_with_request(&request))
            .await?
            .dyn_into()?;

        if !response.ok() {
            return Err(FrameError::http(format!(
                "{} {}",
                response.status(),
                response.status_text()
            )));
        }

        let text = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default();

        Ok(decode_body(&text))
    }
}


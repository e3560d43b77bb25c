use crate::domain::error::FrameError;
use wasm_bindgen::JsValue;

/// Conversion from JsValue to FrameError for DOM calls
impl From<JsValue> for FrameError {
    fn from(err: JsValue) -> Self {
        FrameError::dom(
            err.as_string()
                .or_else(|| {
                    js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                        .ok()
                        .and_then(|m| m.as_string())
                })
                .unwrap_or_else(|| "Unknown JavaScript error".to_string()),
        )
    }
}

/// Conversion from FrameError to JsValue for the wasm boundary
impl From<FrameError> for JsValue {
    fn from(error: FrameError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

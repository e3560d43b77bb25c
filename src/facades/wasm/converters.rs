use crate::domain::error::FrameError;
use serde::de::DeserializeOwned;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

/// Reads an options object, falling back to defaults for `undefined`/`null`.
pub fn parse_options<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    from_value(value).map_err(|e| FrameError::Config(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::FrameConfig;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_undefined_options_use_defaults() {
        let config: FrameConfig = parse_options(JsValue::UNDEFINED).unwrap();
        assert_eq!(config, FrameConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_null_options_use_defaults() {
        let config: FrameConfig = parse_options(JsValue::NULL).unwrap();
        assert_eq!(config, FrameConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_invalid_options_are_config_errors() {
        let result: Result<FrameConfig, JsValue> = parse_options(JsValue::from_str("content"));
        let message = result.unwrap_err().as_string().unwrap();
        assert!(message.starts_with("Configuration Error"));
    }
}

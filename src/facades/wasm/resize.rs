use super::converters;
use crate::adapters::wasm::{DomChangeSignals, DomDocument, ParentWindowSink};
use crate::domain::config::FrameConfig;
use crate::domain::error::FrameError;
use crate::domain::resize::{self, Activation, EmbeddingContext};
use crate::global;
use crate::platform::Platform;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

const LOADING: &str = "loading";

/// Starts reporting the content size to the parent frame.
///
/// Returns `false` on a top-level page, where nothing is registered. While
/// the document is still loading, activation waits for `DOMContentLoaded`.
#[wasm_bindgen]
pub fn start_resize_relay(options: JsValue) -> Result<bool, JsValue> {
    let config: FrameConfig = converters::parse_options(options)?;
    let window = global::window()?;

    let embedding = match config.embedded {
        Some(flag) => EmbeddingContext::from_flag(flag),
        None => global::detect_embedding(&window)?,
    };
    if !embedding.is_embedded() {
        return Ok(false);
    }

    let document = global::document(&window)?;
    let ready_state = document.ready_state();
    start_when_ready(window, document, &ready_state, config, embedding)
}

fn start_when_ready(
    window: Window,
    document: Document,
    ready_state: &str,
    config: FrameConfig,
    embedding: EmbeddingContext,
) -> Result<bool, JsValue> {
    if ready_state == LOADING {
        let pending = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = activate(&window, pending, &config, embedding) {
                Platform::new()
                    .logger()
                    .error(&format!("Failed to start resize relay: {}", e));
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(true);
    }

    let activation = activate(&window, document, &config, embedding)?;
    Ok(activation.is_active())
}

fn activate(
    window: &Window,
    document: Document,
    config: &FrameConfig,
    embedding: EmbeddingContext,
) -> Result<Activation, FrameError> {
    let platform = Platform::new();
    let dom = Rc::new(DomDocument::new(document, &config.content_element_id)?);
    let signals = DomChangeSignals::new(window.clone(), dom.content().clone());
    let sink = Rc::new(ParentWindowSink::for_window(window)?);

    resize::install(embedding, config, dom, &signals, sink, &platform)
}

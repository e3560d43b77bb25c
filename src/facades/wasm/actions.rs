use super::converters;
use crate::adapters::wasm::{FetchHttp, WindowNavigation};
use crate::debug_log;
use crate::domain::actions::{accept_late_submission, download_report};
use crate::domain::config::ActionsConfig;
use crate::domain::error::FrameError;
use crate::global;
use crate::platform::Platform;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlElement};

/// Binds the late-submission and report buttons found under `root`.
///
/// A button is only bound when both its handler URL is given and it exists
/// in the fragment.
#[wasm_bindgen]
pub fn bind_grading_actions(root: HtmlElement, options: JsValue) -> Result<(), JsValue> {
    let config: ActionsConfig = converters::parse_options(options)?;
    let window = global::window()?;

    if let Some(url) = config.late_submission_url {
        let window = window.clone();
        bind_click(&root, &config.late_submission_selector, move || {
            let url = url.clone();
            let window = window.clone();
            spawn_local(async move {
                let logger = Platform::new().logger();
                let http = FetchHttp::new(window.clone());
                let navigation = WindowNavigation::new(&window);
                let outcome = accept_late_submission(&http, &navigation, logger, &url).await;
                debug_log!(logger, "[actions] late submission: {:?}", outcome);
            });
        })?;
    }

    if let Some(url) = config.report_url {
        bind_click(&root, &config.report_selector, move || {
            let url = url.clone();
            let window = window.clone();
            spawn_local(async move {
                let logger = Platform::new().logger();
                let http = FetchHttp::new(window.clone());
                let navigation = WindowNavigation::new(&window);
                let outcome = download_report(&http, &navigation, logger, &url).await;
                debug_log!(logger, "[actions] report download: {:?}", outcome);
            });
        })?;
    }

    Ok(())
}

fn bind_click<F>(root: &HtmlElement, selector: &str, on_click: F) -> Result<bool, FrameError>
where
    F: Fn() + 'static,
{
    let Some(button) = root.query_selector(selector)? else {
        return Ok(false);
    };

    let handler = Closure::wrap(Box::new(move |_: Event| on_click()) as Box<dyn FnMut(Event)>);
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(true)
}


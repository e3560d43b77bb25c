use crate::domain::error::FrameError;
use crate::domain::resize::Trigger;
use crate::ports::{ChangeCallback, ChangeSignalPort};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MutationObserver, MutationObserverInit, ResizeObserver, Window};

/// Browser change signals for one content element.
///
/// Observers and listeners are never disconnected; their closures are leaked
/// and live as long as the document.
pub struct DomChangeSignals {
    window: Window,
    content: HtmlElement,
}

impl DomChangeSignals {
    pub fn new(window: Window, content: HtmlElement) -> Self {
        Self { window, content }
    }

    fn observe_mutations(&self, handler: &Closure<dyn FnMut(JsValue)>) -> Result<(), FrameError> {
        let observer = MutationObserver::new(handler.as_ref().unchecked_ref())?;
        let options = MutationObserverInit::new();
        options.set_attributes(true);
        options.set_child_list(true);
        options.set_subtree(true);
        observer.observe_with_options(&self.content, &options)?;
        Ok(())
    }

    fn listen_for_load(&self, handler: &Closure<dyn FnMut(JsValue)>) -> Result<(), FrameError> {
        self.window
            .add_event_listener_with_callback("load", handler.as_ref().unchecked_ref())?;
        Ok(())
    }

    fn observe_size(&self, handler: &Closure<dyn FnMut(JsValue)>) -> Result<(), FrameError> {
        let observer = ResizeObserver::new(handler.as_ref().unchecked_ref())?;
        observer.observe(&self.content);
        Ok(())
    }
}

impl ChangeSignalPort for DomChangeSignals {
    fn subscribe(&self, trigger: Trigger, callback: ChangeCallback) -> Result<(), FrameError> {
        let handler = Closure::wrap(Box::new(move |_: JsValue| {
            callback(trigger);
        }) as Box<dyn FnMut(JsValue)>);

        match trigger {
            Trigger::Mutation => self.observe_mutations(&handler)?,
            Trigger::Load => self.listen_for_load(&handler)?,
            Trigger::Resize => self.observe_size(&handler)?,
        }

        handler.forget();
        Ok(())
    }
}

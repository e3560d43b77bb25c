use crate::domain::error::FrameError;
use crate::domain::resize::EmbeddingContext;
use web_sys::{Document, Window};

pub fn window() -> Result<Window, FrameError> {
    web_sys::window().ok_or(FrameError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, FrameError> {
    window
        .document()
        .ok_or_else(|| FrameError::dom("Window has no document"))
}

/// `window !== window.parent`
pub fn detect_embedding(window: &Window) -> Result<EmbeddingContext, FrameError> {
    let Some(parent) = window.parent()? else {
        return Ok(EmbeddingContext::TopLevel);
    };
    let same = js_sys::Object::is(window.as_ref(), parent.as_ref());
    Ok(EmbeddingContext::from_flag(!same))
}

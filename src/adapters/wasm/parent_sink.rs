use crate::domain::error::FrameError;
use crate::domain::resize::FrameMessage;
use crate::ports::MessageSinkPort;
use web_sys::Window;

/// Posts messages to the window hosting this frame.
pub struct ParentWindowSink {
    parent: Window,
}

impl ParentWindowSink {
    pub fn new(parent: Window) -> Self {
        Self { parent }
    }

    pub fn for_window(window: &Window) -> Result<Self, FrameError> {
        let parent = window.parent()?.ok_or(FrameError::NoWindow)?;
        Ok(Self::new(parent))
    }
}

impl MessageSinkPort for ParentWindowSink {
    fn send(&self, message: &FrameMessage, target_origin: &str) -> Result<(), FrameError> {
        let value = serde_wasm_bindgen::to_value(message)
            .map_err(|e| FrameError::serialization(format!("{:?}", e)))?;
        self.parent.post_message(&value, target_origin)?;
        Ok(())
    }
}

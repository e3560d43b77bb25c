use crate::domain::error::FrameError;
use crate::domain::resize::FrameMessage;
use crate::ports::MessageSinkPort;
use std::cell::RefCell;

/// Sink that records each message with the origin it was addressed to.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: RefCell<Vec<(FrameMessage, String)>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            messages: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<(FrameMessage, String)> {
        self.messages.borrow().clone()
    }
}

impl MessageSinkPort for RecordingSink {
    fn send(&self, message: &FrameMessage, target_origin: &str) -> Result<(), FrameError> {
        if self.fail {
            return Err(FrameError::dom("postMessage rejected"));
        }
        self.messages
            .borrow_mut()
            .push((*message, target_origin.to_string()));
        Ok(())
    }
}

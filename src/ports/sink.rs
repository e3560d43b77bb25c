use crate::domain::error::FrameError;
use crate::domain::resize::FrameMessage;

pub trait MessageSinkPort {
    fn send(&self, message: &FrameMessage, target_origin: &str) -> Result<(), FrameError>;
}

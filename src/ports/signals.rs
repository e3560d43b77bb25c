use crate::domain::error::FrameError;
use crate::domain::resize::Trigger;
use std::rc::Rc;

pub type ChangeCallback = Rc<dyn Fn(Trigger)>;

/// Source of "size may have changed" signals.
///
/// Subscriptions live as long as the document; there is no unsubscribe.
pub trait ChangeSignalPort {
    fn subscribe(&self, trigger: Trigger, callback: ChangeCallback) -> Result<(), FrameError>;
}

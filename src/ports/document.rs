use crate::domain::error::FrameError;
use crate::domain::resize::Dimensions;

/// Read access to the content region plus the one body mutation the relay makes.
pub trait DocumentPort {
    /// Current rendered offset box of the content region.
    fn content_size(&self) -> Dimensions;

    fn add_body_class(&self, class: &str) -> Result<(), FrameError>;
}

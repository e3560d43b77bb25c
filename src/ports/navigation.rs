use crate::domain::error::FrameError;

pub trait NavigationPort {
    fn reload(&self) -> Result<(), FrameError>;

    fn assign(&self, url: &str) -> Result<(), FrameError>;
}

use crate::domain::error::FrameError;
use crate::ports::NavigationPort;
use web_sys::{Location, Window};

pub struct WindowNavigation {
    location: Location,
}

impl WindowNavigation {
    pub fn new(window: &Window) -> Self {
        Self {
            location: window.location(),
        }
    }
}

impl NavigationPort for WindowNavigation {
    fn reload(&self) -> Result<(), FrameError> {
        self.location.reload()?;
        Ok(())
    }

    fn assign(&self, url: &str) -> Result<(), FrameError> {
        self.location.assign(url)?;
        Ok(())
    }
}

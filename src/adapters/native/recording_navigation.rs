use crate::domain::error::FrameError;
use crate::ports::NavigationPort;
use std::cell::{Cell, RefCell};

#[derive(Debug, Default)]
pub struct RecordingNavigation {
    reloads: Cell<usize>,
    assigned: RefCell<Vec<String>>,
}

impl RecordingNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }

    pub fn assigned(&self) -> Vec<String> {
        self.assigned.borrow().clone()
    }
}

impl NavigationPort for RecordingNavigation {
    fn reload(&self) -> Result<(), FrameError> {
        self.reloads.set(self.reloads.get() + 1);
        Ok(())
    }

    fn assign(&self, url: &str) -> Result<(), FrameError> {
        self.assigned.borrow_mut().push(url.to_string());
        Ok(())
    }
}

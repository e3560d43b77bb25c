use crate::domain::error::FrameError;
use crate::domain::resize::Dimensions;
use crate::ports::DocumentPort;
use std::cell::{Cell, RefCell};

/// Document whose content size is set by hand.
#[derive(Debug, Default)]
pub struct FixedDocument {
    size: Cell<Dimensions>,
    body_classes: RefCell<Vec<String>>,
    no_body: bool,
}

impl FixedDocument {
    pub fn new(size: Dimensions) -> Self {
        Self {
            size: Cell::new(size),
            body_classes: RefCell::new(Vec::new()),
            no_body: false,
        }
    }

    /// A document without a `<body>`, so marking it fails.
    pub fn without_body(size: Dimensions) -> Self {
        Self {
            no_body: true,
            ..Self::new(size)
        }
    }

    pub fn set_size(&self, size: Dimensions) {
        self.size.set(size);
    }

    pub fn body_classes(&self) -> Vec<String> {
        self.body_classes.borrow().clone()
    }
}

impl DocumentPort for FixedDocument {
    fn content_size(&self) -> Dimensions {
        self.size.get()
    }

    fn add_body_class(&self, class: &str) -> Result<(), FrameError> {
        if self.no_body {
            return Err(FrameError::ElementNotFound("body".to_string()));
        }
        let mut classes = self.body_classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }
}

use crate::domain::error::FrameError;
use crate::domain::resize::Dimensions;
use crate::ports::DocumentPort;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub struct DomDocument {
    document: Document,
    content: HtmlElement,
}

impl DomDocument {
    /// Resolves the content region by element id.
    pub fn new(document: Document, content_element_id: &str) -> Result<Self, FrameError> {
        let content = document
            .get_element_by_id(content_element_id)
            .ok_or_else(|| FrameError::ElementNotFound(content_element_id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| {
                FrameError::dom(format!("#{} is not an HTML element", content_element_id))
            })?;

        Ok(Self { document, content })
    }

    pub fn content(&self) -> &HtmlElement {
        &self.content
    }
}

impl DocumentPort for DomDocument {
    fn content_size(&self) -> Dimensions {
        Dimensions::from_offsets(self.content.offset_width(), self.content.offset_height())
    }

    fn add_body_class(&self, class: &str) -> Result<(), FrameError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| FrameError::ElementNotFound("body".to_string()))?;
        body.class_list().add_1(class)?;
        Ok(())
    }
}

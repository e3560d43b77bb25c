use serde::{Deserialize, Serialize};

/// Target origin handed to `postMessage`. The host origin cannot be read
/// reliably from inside the frame, and the payload is layout only.
pub const WILDCARD_ORIGIN: &str = "*";

/// Rendered offset box of the content region, in CSS pixels.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds dimensions from DOM offset values, which are signed.
    pub fn from_offsets(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }
    }
}

/// Messages posted to the hosting window.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum FrameMessage {
    #[serde(rename = "plugin.resize")]
    Resize(Dimensions),
}

impl FrameMessage {
    pub fn resize(dimensions: Dimensions) -> Self {
        FrameMessage::Resize(dimensions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Structural or attribute change anywhere under the content region.
    Mutation,
    /// Window load completion.
    Load,
    /// Layout-only size change of the content region itself.
    Resize,
}

impl Trigger {
    pub const ALL: [Trigger; 3] = [Trigger::Mutation, Trigger::Load, Trigger::Resize];

    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Mutation => "mutation",
            Trigger::Load => "load",
            Trigger::Resize => "resize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingContext {
    TopLevel,
    Embedded,
}

impl EmbeddingContext {
    pub fn from_flag(embedded: bool) -> Self {
        if embedded {
            EmbeddingContext::Embedded
        } else {
            EmbeddingContext::TopLevel
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, EmbeddingContext::Embedded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Dormant,
    Active { triggers: Vec<Trigger> },
}

impl Activation {
    pub fn is_active(&self) -> bool {
        matches!(self, Activation::Active { .. })
    }
}

pub mod notifier;
pub mod types;

pub use notifier::{install, ResizeNotifier};
pub use types::{Activation, Dimensions, EmbeddingContext, FrameMessage, Trigger, WILDCARD_ORIGIN};

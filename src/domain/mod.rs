pub mod actions;
pub mod config;
pub mod error;
pub mod resize;

pub use config::{ActionsConfig, FrameConfig};
pub use error::FrameError;

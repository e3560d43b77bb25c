#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub mod debug;
#[cfg(target_arch = "wasm32")]
pub mod global;

pub use domain::config::{ActionsConfig, FrameConfig};
pub use domain::error::FrameError;
pub use domain::resize::{install, Dimensions, EmbeddingContext, FrameMessage, ResizeNotifier, Trigger};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}

use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

/// Logs through the platform logger only when debug mode is on.
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)*) => {{
        if $crate::debug::is_debug() {
            $logger.debug(&format!($($arg)*));
        }
    }};
}

pub use crate::debug_log;

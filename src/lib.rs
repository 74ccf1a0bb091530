//! Philosophers Timeline WASM Module
//!
//! Layout and presentation logic for the philosophers web app: timeline
//! column placement, per-identifier colors, year formatting and
//! anniversary grouping. Rendering and data fetching stay in JavaScript.

pub mod api;
pub mod colors;
pub mod events;
pub mod models;
pub mod timeline;

// Re-export commonly used types
pub use colors::{Color, ColorCache, ColorPair, ColorPairCache};
pub use models::{format_signed_year, format_year, parse_year, try_parse_year, Entity};
pub use timeline::{
    compute_timeline, Canvas, PlacedItem, TimelineConfig, TimelineDisplayList, TimelineLayout,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        console_warn(&format!("[WASM] ⚠️ logger already initialized: {}", e));
    }

    log::info!("Philosophers timeline WASM module initialized");
}

#[cfg(feature = "console_log")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);
}

//! Philosophers Timeline WASM API
//!
//! This module provides the JavaScript-facing API. Each submodule wraps one
//! core module, converting arguments with serde-wasm-bindgen and turning
//! failures into logged `JsValue` errors.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization and error reporting
//! - `errors`: Boundary error type
//! - `timeline`: Layout and display list computation, year parsing
//! - `colors`: Process-wide color caches
//! - `events`: Anniversary grouping

pub mod colors;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod timeline;

pub use colors::{color_for_id, color_pair_for_id};
pub use errors::ApiError;
pub use events::{categorize_anniversaries, format_event_date_js};
pub use timeline::{compute_timeline_display, compute_timeline_js, format_year_js, parse_year_js};

//! Stable per-identifier colors
//!
//! Two independent caches: single colors for lifelines, light/dark pairs
//! for tinted cards.

pub mod cache;
pub mod palette;

pub use cache::{ColorCache, ColorPairCache, RoundRobinCache};
pub use palette::{Color, ColorPair};

//! Timeline Layout Engine
//!
//! This module places philosophers on a vertical year axis with
//! column-based collision avoidance, and generates a display list with all
//! positioning and labels JavaScript needs to render the timeline.

pub mod config;
pub mod display_list;
pub mod engine;
pub mod occupancy;

pub use config::TimelineConfig;
pub use display_list::{AxisLine, RenderTick, RenderTimelineCell, TimelineDisplayList};
pub use engine::{compute_timeline, Canvas, PlacedItem, TimelineLayout};

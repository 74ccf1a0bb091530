//! Data models for the philosophers timeline
//!
//! Input records and the year-string conventions they use.

pub mod entity;
pub mod year;

// Re-export commonly used types
pub use entity::Entity;
pub use year::{format_signed_year, format_year, parse_year, try_parse_year};

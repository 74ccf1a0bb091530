//! Timeline layout configuration

use serde::{Deserialize, Serialize};

/// Configuration for timeline layout calculations
///
/// JavaScript may pass any subset of the fields; missing ones take the
/// defaults below.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineConfig {
    /// Layout units per year
    pub year_to_point_scale: f64,

    /// Padding years added before the first birth and after the last death
    pub addition_years: i64,

    /// Width of a cell column
    pub cell_width: f64,

    /// Height of a bar whose death year is unknown, and minimum cell height
    pub cell_height: f64,

    /// Horizontal gap between columns
    pub cell_padding: f64,

    /// Vertical gap kept below each bar in its column
    pub vertical_cell_padding: f64,

    /// X offset of the first column
    pub cell_x_inset: f64,

    /// X position of the axis line
    pub line_x_inset: f64,

    /// X position of axis tick labels
    pub label_x_inset: f64,

    /// Years between axis ticks
    pub tick_interval: i64,

    /// Year used for open-ended lifespans when sizing the canvas.
    /// `None` reads the wall clock.
    pub current_year: Option<i64>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            year_to_point_scale: 1.5,
            addition_years: 27,
            cell_width: 60.0,
            cell_height: 100.0,
            cell_padding: 8.0,
            vertical_cell_padding: 50.0,
            cell_x_inset: 80.0,
            line_x_inset: 16.0,
            label_x_inset: 25.0,
            tick_interval: 50,
            current_year: None,
        }
    }
}

impl TimelineConfig {
    /// Horizontal distance between the left edges of adjacent columns
    pub fn column_stride(&self) -> f64 {
        self.cell_width + self.cell_padding
    }

    /// Left edge of a column
    pub fn column_x(&self, column: usize) -> f64 {
        self.cell_x_inset + column as f64 * self.column_stride()
    }

    /// Vertical offset of a year relative to the first year on the canvas
    pub fn year_to_y(&self, year: i64, first_year: i64) -> f64 {
        year.saturating_sub(first_year) as f64 * self.year_to_point_scale
    }

    pub fn resolve_current_year(&self) -> i64 {
        use chrono::Datelike;

        self.current_year
            .unwrap_or_else(|| i64::from(chrono::Utc::now().year()))
    }
}

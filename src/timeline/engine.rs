//! Timeline layout engine
//!
//! Places dated entities on a vertical year axis. Each entity becomes a bar
//! starting at its birth year; bars whose padded vertical spans would touch
//! are pushed into separate columns, lowest free column first.

use serde::{Deserialize, Serialize};

use crate::models::Entity;
use super::config::TimelineConfig;
use super::occupancy::{ColumnSet, Span};

/// An entity with its computed position
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    pub entity: Entity,

    /// Vertical offset of the bar's top edge
    pub top: f64,

    /// Bar height excluding vertical padding: the lifespan, or the default
    /// cell height when the death year is unknown
    pub height: f64,

    /// Zero-based column index
    pub column: usize,
}

impl PlacedItem {
    /// Bottom of the span this item reserves in its column
    pub fn padded_bottom(&self, config: &TimelineConfig) -> f64 {
        self.top + self.height + config.vertical_cell_padding
    }
}

/// Overall canvas dimensions
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// Result of one layout pass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    /// Placed entities in ascending birth-year order
    pub items: Vec<PlacedItem>,

    pub canvas: Canvas,

    /// Year at the top edge of the canvas (earliest birth minus padding)
    pub first_year: i64,

    /// Year at the bottom edge of the canvas (latest death plus padding)
    pub last_year: i64,
}

impl TimelineLayout {
    /// Layout with no items and a canvas only as wide as the column inset
    pub fn empty(config: &TimelineConfig) -> Self {
        Self {
            items: Vec::new(),
            canvas: Canvas {
                width: config.cell_x_inset,
                height: 0.0,
            },
            first_year: 0,
            last_year: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of columns in use
    pub fn column_count(&self) -> usize {
        self.items.iter().map(|item| item.column + 1).max().unwrap_or(0)
    }
}

/// Compute a complete timeline layout
///
/// Entities without a readable birth year are dropped. The rest are
/// stable-sorted by birth year, so entities born in the same year keep
/// their input order, and then placed one by one.
pub fn compute_timeline(entities: &[Entity], config: &TimelineConfig) -> TimelineLayout {
    let mut dated: Vec<(i64, &Entity)> = entities
        .iter()
        .filter_map(|entity| entity.birth().map(|birth| (birth, entity)))
        .collect();

    if dated.len() < entities.len() {
        log::debug!(
            "Timeline: skipping {} entities without a birth year",
            entities.len() - dated.len()
        );
    }

    dated.sort_by_key(|(birth, _)| *birth);
    solve(&dated, config)
}

/// Place pre-sorted `(birth_year, entity)` pairs
fn solve(dated: &[(i64, &Entity)], config: &TimelineConfig) -> TimelineLayout {
    let Some(min_birth) = dated.iter().map(|(birth, _)| *birth).min() else {
        return TimelineLayout::empty(config);
    };

    let current_year = config.resolve_current_year();
    let max_death = dated
        .iter()
        .map(|(_, entity)| entity.death().unwrap_or(current_year))
        .max()
        .unwrap_or(current_year);

    let first_year = min_birth.saturating_sub(config.addition_years);
    let last_year = max_death.saturating_add(config.addition_years);

    let mut columns = ColumnSet::new();
    let mut items = Vec::with_capacity(dated.len());

    for (birth, entity) in dated {
        let start_y = config.year_to_y(*birth, first_year);
        let end_y = match entity.death() {
            Some(death) => config.year_to_y(death, first_year),
            None => start_y + config.cell_height,
        };
        let padded_end_y = end_y + config.vertical_cell_padding;

        // A bar ending above its own start claims nothing and sits in column 0
        let column = match Span::covering(start_y, padded_end_y) {
            Some(span) => columns.place(span),
            None => 0,
        };

        items.push(PlacedItem {
            entity: (*entity).clone(),
            top: start_y,
            height: end_y - start_y,
            column,
        });
    }

    let max_column = items.iter().map(|item| item.column).max().unwrap_or(0);
    let canvas = Canvas {
        width: config.cell_x_inset + (max_column + 1) as f64 * config.column_stride(),
        height: last_year.saturating_sub(first_year) as f64 * config.year_to_point_scale,
    };

    log::debug!(
        "Timeline: placed {} entities in {} columns, years {}..{}",
        items.len(),
        max_column + 1,
        first_year,
        last_year
    );

    TimelineLayout {
        items,
        canvas,
        first_year,
        last_year,
    }
}

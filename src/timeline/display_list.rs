//! Display list for timeline rendering
//!
//! Turns a [`TimelineLayout`] into absolute positions, labels and colors so
//! JavaScript can create DOM elements without doing any layout math.

use serde::{Deserialize, Serialize};

use crate::colors::ColorCache;
use crate::models::{format_signed_year, format_year};
use super::config::TimelineConfig;
use super::engine::{PlacedItem, TimelineLayout};

/// Top-level display list for the timeline view
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDisplayList {
    /// Canvas width
    pub width: f64,

    /// Canvas height
    pub height: f64,

    /// Vertical axis line
    pub axis: AxisLine,

    /// Year markers along the axis
    pub ticks: Vec<RenderTick>,

    /// One cell per placed entity
    pub cells: Vec<RenderTimelineCell>,
}

/// The vertical axis running the full canvas height
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AxisLine {
    pub x: f64,
    pub height: f64,
}

/// A year marker: a dot on the axis with a label beside it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderTick {
    pub year: i64,

    /// "650 BC", "50 AD"
    pub label: String,

    pub top: f64,
    pub dot_x: f64,
    pub label_x: f64,
}

/// A positioned entity cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderTimelineCell {
    pub id: String,
    pub username: Option<String>,

    /// Last word of the display name
    pub short_name: String,

    pub birth_label: String,
    pub death_label: String,

    /// Left edge
    pub x: f64,

    /// Top edge
    pub y: f64,

    pub w: f64,

    /// Cell height, never shorter than the configured cell height
    pub h: f64,

    pub column: usize,

    /// Length of the lifespan line (0 when the death year is unknown)
    pub lifeline_height: f64,

    /// Lifeline color
    pub color: String,
}

impl TimelineDisplayList {
    /// Build the display list for a computed layout
    ///
    /// Colors are drawn from `colors` in item order, so the same cache
    /// yields the same color for an entity across rebuilds.
    pub fn build(
        layout: &TimelineLayout,
        config: &TimelineConfig,
        colors: &mut ColorCache,
    ) -> Self {
        let cells = layout
            .items
            .iter()
            .map(|item| build_cell(item, config, colors))
            .collect();

        Self {
            width: layout.canvas.width,
            height: layout.canvas.height,
            axis: AxisLine {
                x: config.line_x_inset,
                height: layout.canvas.height,
            },
            ticks: build_ticks(layout, config),
            cells,
        }
    }
}

fn build_cell(
    item: &PlacedItem,
    config: &TimelineConfig,
    colors: &mut ColorCache,
) -> RenderTimelineCell {
    let entity = &item.entity;

    let lifespan = match (entity.birth(), entity.death()) {
        (Some(birth), Some(death)) => death - birth,
        _ => 0,
    };
    let lifeline_height = lifespan as f64 * config.year_to_point_scale;

    RenderTimelineCell {
        id: entity.id.clone(),
        username: entity.username.clone(),
        short_name: entity.short_name().to_string(),
        birth_label: format_year(entity.birth_year.as_deref()),
        death_label: format_year(entity.death_year.as_deref()),
        x: config.column_x(item.column),
        y: item.top,
        w: config.cell_width,
        h: lifeline_height.max(config.cell_height),
        column: item.column,
        lifeline_height,
        color: colors.color_for_id(&entity.id).to_string(),
    }
}

/// Ticks every `tick_interval` years from the first year on the canvas
fn build_ticks(layout: &TimelineLayout, config: &TimelineConfig) -> Vec<RenderTick> {
    if layout.is_empty() || config.tick_interval <= 0 || config.year_to_point_scale <= 0.0 {
        return Vec::new();
    }

    let year_span = layout.canvas.height / config.year_to_point_scale;
    let tick_count = (year_span / config.tick_interval as f64).floor() as i64;

    (0..=tick_count)
        .map(|i| {
            let offset_years = i * config.tick_interval;
            let year = layout.first_year + offset_years;
            RenderTick {
                year,
                label: format_signed_year(year),
                top: offset_years as f64 * config.year_to_point_scale,
                dot_x: config.line_x_inset,
                label_x: config.label_x_inset,
            }
        })
        .collect()
}

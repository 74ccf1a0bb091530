//! Timeline layout operations exposed to JavaScript

use wasm_bindgen::prelude::*;

use crate::models::{format_year, parse_year, Entity};
use crate::timeline::{compute_timeline, TimelineConfig, TimelineDisplayList};
use super::colors::with_color_cache;
use super::helpers::{deserialize, deserialize_or_default, serialize};

fn layout_inputs(
    entities_js: JsValue,
    config_js: JsValue,
) -> Result<(Vec<Entity>, TimelineConfig), JsValue> {
    let entities: Vec<Entity> = deserialize(entities_js, "Failed to deserialize entities")?;
    let config: TimelineConfig =
        deserialize_or_default(config_js, "Failed to deserialize timeline config")?;
    Ok((entities, config))
}

/// Compute column placement for a list of entities
///
/// # Parameters
/// - `entities_js`: array of `{ id, name, username?, birthYear?, deathYear? }`
/// - `config_js`: optional partial `TimelineConfig`
///
/// # Returns
/// `{ items, canvas: { width, height }, firstYear, lastYear }`
#[wasm_bindgen(js_name = computeTimeline)]
pub fn compute_timeline_js(entities_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let (entities, config) = layout_inputs(entities_js, config_js)?;
    log::debug!("[WASM] computeTimeline called with {} entities", entities.len());

    let layout = compute_timeline(&entities, &config);
    serialize(&layout, "Failed to serialize timeline layout")
}

/// Compute the layout and resolve it into a render-ready display list.
/// Lifeline colors come from the shared color cache used by `colorForId`.
#[wasm_bindgen(js_name = computeTimelineDisplay)]
pub fn compute_timeline_display(
    entities_js: JsValue,
    config_js: JsValue,
) -> Result<JsValue, JsValue> {
    let (entities, config) = layout_inputs(entities_js, config_js)?;
    log::debug!("[WASM] computeTimelineDisplay called with {} entities", entities.len());

    let layout = compute_timeline(&entities, &config);
    let display = with_color_cache(|colors| TimelineDisplayList::build(&layout, &config, colors));
    serialize(&display, "Failed to serialize timeline display list")
}

/// Parse an era-suffixed year ("428 BC" -> -428). Unknown years yield 0.
#[wasm_bindgen(js_name = parseYear)]
pub fn parse_year_js(raw: Option<String>) -> f64 {
    parse_year(raw.as_deref()) as f64
}

/// Normalize a year string for display ("0428 BC" -> "428 BC")
#[wasm_bindgen(js_name = formatYear)]
pub fn format_year_js(raw: Option<String>) -> String {
    format_year(raw.as_deref())
}

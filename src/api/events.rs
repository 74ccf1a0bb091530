//! Anniversary grouping exposed to JavaScript

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

use crate::events::{
    categorize_events, events_for_philosophers, format_event_date, PhilosopherDates,
};
use super::errors::ApiError;
use super::helpers::{deserialize, report, serialize};

fn parse_iso_date(raw: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| report(ApiError::InvalidDate(raw.to_string())))
}

/// Group philosophers' birth and death anniversaries around a day.
///
/// # Parameters
/// - `philosophers_js`: array of `{ id, name, username, thumbnailUrl?, birthDate?, deathDate? }`
/// - `today`: optional `YYYY-MM-DD`; the local date when omitted
///
/// # Returns
/// `{ current, upcoming, past }`, each an array of events
#[wasm_bindgen(js_name = categorizeAnniversaries)]
pub fn categorize_anniversaries(
    philosophers_js: JsValue,
    today: Option<String>,
) -> Result<JsValue, JsValue> {
    let philosophers: Vec<PhilosopherDates> =
        deserialize(philosophers_js, "Failed to deserialize philosophers")?;

    let today = match today.as_deref() {
        Some(raw) => parse_iso_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let events = events_for_philosophers(&philosophers);
    let categorized = categorize_events(events, today);
    serialize(&categorized, "Failed to serialize anniversaries")
}

/// Format a `YYYY-MM-DD` date as "21 April"
#[wasm_bindgen(js_name = formatEventDate)]
pub fn format_event_date_js(date: &str) -> Result<String, JsValue> {
    Ok(format_event_date(parse_iso_date(date)?))
}

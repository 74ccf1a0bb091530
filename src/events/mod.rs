//! Birth and death anniversaries
//!
//! Philosopher records may carry full calendar dates ("21 April 1724").
//! These are turned into dated events and grouped by how close their day
//! of the year falls to today.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar date format used by philosopher records
const DATE_FORMAT: &str = "%d %B %Y";

/// Days looked ahead and behind when grouping anniversaries
pub const WINDOW_DAYS: i64 = 7;

/// Which end of a life an event marks
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Birth,
    Death,
}

/// Philosopher fields needed to derive anniversary events
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PhilosopherDates {
    pub id: String,
    pub name: String,
    pub username: String,
    pub thumbnail_url: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
}

/// A dated birth or death
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateEvent {
    pub id: String,
    pub philosopher_id: String,
    pub name: String,
    pub username: String,
    pub thumbnail_url: Option<String>,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// Events grouped relative to today
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorizedEvents {
    /// Same day of the year as today
    pub current: Vec<DateEvent>,

    /// Within the next week
    pub upcoming: Vec<DateEvent>,

    /// Within the past week
    pub past: Vec<DateEvent>,
}

/// Parse a "d MMMM y" date such as "21 April 1724"
pub fn parse_philosopher_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Month and day match, ignoring the year
pub fn is_same_day_of_year(a: NaiveDate, b: NaiveDate) -> bool {
    a.month() == b.month() && a.day() == b.day()
}

/// One event per parseable birth or death date, births first
pub fn events_for_philosophers(philosophers: &[PhilosopherDates]) -> Vec<DateEvent> {
    philosophers
        .iter()
        .flat_map(|philosopher| {
            [
                (EventKind::Birth, philosopher.birth_date.as_deref()),
                (EventKind::Death, philosopher.death_date.as_deref()),
            ]
            .into_iter()
            .filter_map(move |(kind, raw)| {
                parse_philosopher_date(raw).map(|date| DateEvent {
                    id: philosopher.id.clone(),
                    philosopher_id: philosopher.id.clone(),
                    name: philosopher.name.clone(),
                    username: philosopher.username.clone(),
                    thumbnail_url: philosopher.thumbnail_url.clone(),
                    date,
                    kind,
                })
            })
        })
        .collect()
}

/// Group events into today, the coming week and the past week.
/// Events outside those windows are dropped.
pub fn categorize_events(events: Vec<DateEvent>, today: NaiveDate) -> CategorizedEvents {
    let next_week: Vec<NaiveDate> = (1..=WINDOW_DAYS).map(|i| today + Duration::days(i)).collect();
    let last_week: Vec<NaiveDate> = (1..=WINDOW_DAYS).map(|i| today - Duration::days(i)).collect();

    let mut categorized = CategorizedEvents::default();

    for event in events {
        let event_date = event.date;
        let matches = |days: &[NaiveDate]| days.iter().any(|d| is_same_day_of_year(*d, event_date));

        if is_same_day_of_year(event_date, today) {
            categorized.current.push(event);
        } else if matches(&next_week) {
            categorized.upcoming.push(event);
        } else if matches(&last_week) {
            categorized.past.push(event);
        }
    }

    log::debug!(
        "Anniversaries: {} today, {} upcoming, {} past",
        categorized.current.len(),
        categorized.upcoming.len(),
        categorized.past.len()
    );

    categorized
}

/// "21 April"
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%-d %B").to_string()
}

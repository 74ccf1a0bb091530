//! Philosopher records as they arrive from the data layer

use serde::{Deserialize, Serialize};

use super::year::try_parse_year;

/// A dated entity placed on the timeline
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Opaque unique identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Profile handle, passed through for navigation
    #[serde(default)]
    pub username: Option<String>,

    /// Era-suffixed birth year, e.g. "428 BC"
    #[serde(default)]
    pub birth_year: Option<String>,

    /// Era-suffixed death year, absent for undated deaths
    #[serde(default)]
    pub death_year: Option<String>,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: None,
            birth_year: None,
            death_year: None,
        }
    }

    /// Builder-style setter for the lifespan strings
    pub fn with_years(mut self, birth: Option<&str>, death: Option<&str>) -> Self {
        self.birth_year = birth.map(str::to_string);
        self.death_year = death.map(str::to_string);
        self
    }

    pub fn birth(&self) -> Option<i64> {
        try_parse_year(self.birth_year.as_deref())
    }

    pub fn death(&self) -> Option<i64> {
        try_parse_year(self.death_year.as_deref())
    }

    /// Last whitespace-separated word of the name ("Immanuel Kant" -> "Kant")
    pub fn short_name(&self) -> &str {
        self.name.split(' ').next_back().unwrap_or_default()
    }
}

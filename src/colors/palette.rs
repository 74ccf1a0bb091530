//! Fixed color palettes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS color value (hex string)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A light tint and its matching dark shade
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ColorPair {
    pub light: Color,
    pub dark: Color,
}

impl ColorPair {
    pub fn new(light: impl Into<Color>, dark: impl Into<Color>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }
}

// Named colors shared by both palettes
pub const BLUE: &str = "#2f6fde";
pub const LIGHT_BLUE: &str = "#dbe8fd";
pub const PINK: &str = "#d63d8c";
pub const LIGHT_PINK: &str = "#fbe0ee";
pub const GREEN: &str = "#2e9a5a";
pub const LIGHT_GREEN: &str = "#dcf3e4";
pub const ORANGE: &str = "#e07b1f";
pub const LIGHT_ORANGE: &str = "#fdebd8";
pub const DARK_RED: &str = "#b3261e";
pub const LIGHT_RED: &str = "#fbdedc";
pub const PURPLE: &str = "#7a4fd6";
pub const LIGHT_PURPLE: &str = "#ebe3fb";
pub const TEAL: &str = "#1f9c9c";
pub const YELLOW: &str = "#d9a400";
pub const BROWN: &str = "#8a5a3b";
pub const INDIGO: &str = "#3f4fb5";
pub const OLIVE: &str = "#6f7d25";
pub const SLATE: &str = "#54657e";

/// Single colors handed out for lifelines and avatars, in assignment order
pub const BACKGROUND_COLORS: [&str; 12] = [
    BLUE, PINK, GREEN, ORANGE, DARK_RED, PURPLE, TEAL, YELLOW, BROWN, INDIGO, OLIVE, SLATE,
];

/// Light/dark pairs for tinted cards, in assignment order
pub const COLOR_PAIRS: [(&str, &str); 6] = [
    (LIGHT_BLUE, BLUE),
    (LIGHT_PINK, PINK),
    (LIGHT_GREEN, GREEN),
    (LIGHT_ORANGE, ORANGE),
    (LIGHT_RED, DARK_RED),
    (LIGHT_PURPLE, PURPLE),
];

pub fn default_background_palette() -> Vec<Color> {
    BACKGROUND_COLORS.iter().copied().map(Color::from).collect()
}

pub fn default_pair_palette() -> Vec<ColorPair> {
    COLOR_PAIRS
        .iter()
        .map(|&(light, dark)| ColorPair::new(light, dark))
        .collect()
}

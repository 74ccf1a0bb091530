//! Identifier to color assignment
//!
//! Colors are handed out round-robin in the order identifiers are first
//! seen: the Nth distinct identifier gets palette slot `N % palette.len()`.
//! The identifier text itself never influences the slot, and a repeated
//! lookup always returns the color assigned the first time.

use std::collections::HashMap;

use super::palette::{default_background_palette, default_pair_palette, Color, ColorPair};

/// Discovery-order slot assignment over a non-empty palette
#[derive(Clone, Debug)]
pub struct RoundRobinCache<T> {
    palette: Vec<T>,
    assigned: HashMap<String, usize>,
    next_slot: usize,
}

impl<T> RoundRobinCache<T> {
    /// Returns `None` for an empty palette
    pub fn with_palette(palette: Vec<T>) -> Option<Self> {
        if palette.is_empty() {
            return None;
        }
        Some(Self {
            palette,
            assigned: HashMap::new(),
            next_slot: 0,
        })
    }

    /// Palette slot for `id`, assigning the next one on first sight
    pub fn slot_for(&mut self, id: &str) -> usize {
        if let Some(&slot) = self.assigned.get(id) {
            return slot;
        }

        let slot = self.next_slot % self.palette.len();
        self.assigned.insert(id.to_string(), slot);
        self.next_slot += 1;
        slot
    }

    pub fn get(&mut self, id: &str) -> &T {
        let slot = self.slot_for(id);
        &self.palette[slot]
    }

    /// Number of distinct identifiers seen so far
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn palette(&self) -> &[T] {
        &self.palette
    }
}

/// Single-color assignments
#[derive(Clone, Debug)]
pub struct ColorCache {
    inner: RoundRobinCache<Color>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self {
            inner: RoundRobinCache {
                palette: default_background_palette(),
                assigned: HashMap::new(),
                next_slot: 0,
            },
        }
    }

    pub fn with_palette(palette: Vec<Color>) -> Option<Self> {
        RoundRobinCache::with_palette(palette).map(|inner| Self { inner })
    }

    pub fn color_for_id(&mut self, id: &str) -> &Color {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Light/dark pair assignments, independent of [`ColorCache`]
#[derive(Clone, Debug)]
pub struct ColorPairCache {
    inner: RoundRobinCache<ColorPair>,
}

impl ColorPairCache {
    pub fn new() -> Self {
        Self {
            inner: RoundRobinCache {
                palette: default_pair_palette(),
                assigned: HashMap::new(),
                next_slot: 0,
            },
        }
    }

    pub fn with_palette(palette: Vec<ColorPair>) -> Option<Self> {
        RoundRobinCache::with_palette(palette).map(|inner| Self { inner })
    }

    pub fn color_pair_for_id(&mut self, id: &str) -> &ColorPair {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for ColorPairCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::palette::{BACKGROUND_COLORS, COLOR_PAIRS};

    #[test]
    fn test_empty_palette_rejected() {
        assert!(ColorCache::with_palette(Vec::new()).is_none());
        assert!(ColorPairCache::with_palette(Vec::new()).is_none());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let mut cache = ColorCache::new();
        let first = cache.color_for_id("socrates").clone();
        let second = cache.color_for_id("socrates").clone();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_slots_follow_discovery_order() {
        let mut cache = RoundRobinCache::with_palette(vec!['a', 'b', 'c']).unwrap();

        assert_eq!(cache.slot_for("zeta"), 0);
        assert_eq!(cache.slot_for("alpha"), 1);
        assert_eq!(cache.slot_for("zeta"), 0);
        assert_eq!(cache.slot_for("mu"), 2);
        assert_eq!(cache.slot_for("omega"), 0);
        assert_eq!(*cache.get("beta"), 'b');
    }

    #[test]
    fn test_default_palettes() {
        let mut colors = ColorCache::new();
        let mut pairs = ColorPairCache::new();

        assert_eq!(colors.color_for_id("x").as_str(), BACKGROUND_COLORS[0]);
        assert_eq!(colors.color_for_id("y").as_str(), BACKGROUND_COLORS[1]);

        // The pair cache keeps its own counter
        let pair = pairs.color_pair_for_id("y");
        assert_eq!(pair.light.as_str(), COLOR_PAIRS[0].0);
        assert_eq!(pair.dark.as_str(), COLOR_PAIRS[0].1);
    }
}

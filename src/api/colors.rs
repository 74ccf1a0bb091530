//! Process-wide color assignment exposed to JavaScript
//!
//! Every caller in the page shares one cache of each kind, so an
//! identifier keeps its color across views for the lifetime of the module.

use std::sync::{Mutex, PoisonError};

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::colors::{ColorCache, ColorPairCache};

lazy_static! {
    static ref COLOR_CACHE: Mutex<ColorCache> = Mutex::new(ColorCache::new());
    static ref COLOR_PAIR_CACHE: Mutex<ColorPairCache> = Mutex::new(ColorPairCache::new());
}

/// Run `f` against the shared single-color cache. Poisoned locks are recovered.
pub fn with_color_cache<R>(f: impl FnOnce(&mut ColorCache) -> R) -> R {
    let mut cache = COLOR_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut cache)
}

pub fn with_color_pair_cache<R>(f: impl FnOnce(&mut ColorPairCache) -> R) -> R {
    let mut cache = COLOR_PAIR_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut cache)
}

/// Stable color for an identifier
#[wasm_bindgen(js_name = colorForId)]
pub fn color_for_id(id: &str) -> String {
    with_color_cache(|cache| cache.color_for_id(id).to_string())
}

/// Stable `[light, dark]` color pair for an identifier
#[wasm_bindgen(js_name = colorPairForId)]
pub fn color_pair_for_id(id: &str) -> js_sys::Array {
    with_color_pair_cache(|cache| {
        let pair = cache.color_pair_for_id(id);
        let result = js_sys::Array::new();
        result.push(&JsValue::from_str(pair.light.as_str()));
        result.push(&JsValue::from_str(pair.dark.as_str()));
        result
    })
}

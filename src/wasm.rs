//! WASM API module for browser/JS interop
//!
//! Exposes the palette engine as JSON-in/JSON-out functions. Palettes cross the
//! boundary as their serde JSON form; errors come back as strings.

use wasm_bindgen::prelude::*;

use crate::chart::chart_series;
use crate::color::{parse_color, ColorSpace};
use crate::edit::{toggle_anchor, update_color};
use crate::models::{PaletteBuild, PaletteSettings};
use crate::naming::{tint_name, TintsNamingMode};
use crate::ramp::regenerate;
use crate::recommend::recommend;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_palette(palette_json: &str) -> Result<PaletteBuild, JsValue> {
    serde_json::from_str(palette_json).map_err(js_error)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_error)
}

/// Generate a fresh palette around `seed`.
///
/// # Arguments
/// * `seed` - Any CSS color string
/// * `settings_json` - `PaletteSettings` JSON; missing fields take their defaults
#[wasm_bindgen]
pub fn generate_palette(seed: &str, settings_json: &str) -> Result<String, JsValue> {
    let seed = parse_color(seed).map_err(js_error)?;
    let settings: PaletteSettings = if settings_json.trim().is_empty() {
        PaletteSettings::default()
    } else {
        serde_json::from_str(settings_json).map_err(js_error)?
    };
    to_json(&PaletteBuild::from_seed(seed, settings))
}

/// Recompute every derived tint of a palette.
#[wasm_bindgen]
pub fn regenerate_palette(palette_json: &str) -> Result<String, JsValue> {
    to_json(&regenerate(&parse_palette(palette_json)?))
}

/// Replace one tint's color; `anchor` pins or unpins it when given.
#[wasm_bindgen]
pub fn update_tint_color(
    palette_json: &str,
    index: usize,
    color: &str,
    anchor: Option<bool>,
) -> Result<String, JsValue> {
    let palette = parse_palette(palette_json)?;
    let color = parse_color(color).map_err(js_error)?;
    to_json(&update_color(&palette, index, color, anchor))
}

/// Flip the anchor flag of one interior tint.
#[wasm_bindgen]
pub fn toggle_tint_anchor(palette_json: &str, index: usize) -> Result<String, JsValue> {
    to_json(&toggle_anchor(&parse_palette(palette_json)?, index))
}

/// Harmony recommendations for a color, as JSON.
#[wasm_bindgen]
pub fn recommend_colors(color: &str, space: &str) -> Result<String, JsValue> {
    let color = parse_color(color).map_err(js_error)?;
    let space: ColorSpace = space.parse().map_err(js_error)?;
    to_json(&recommend(&color, space))
}

/// Chart series of a palette, as JSON.
#[wasm_bindgen]
pub fn palette_chart(palette_json: &str) -> Result<String, JsValue> {
    to_json(&chart_series(&parse_palette(palette_json)?))
}

/// Label of tint `index` in a ramp of `length` tints.
#[wasm_bindgen]
pub fn tint_label(index: usize, length: usize, mode: &str) -> Result<String, JsValue> {
    let mode: TintsNamingMode = mode.parse().map_err(js_error)?;
    Ok(tint_name(index, length, mode, None))
}

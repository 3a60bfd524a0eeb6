//! WASM tests using wasm_bindgen_test
//!
//! Run with: wasm-pack test --headless --chrome --features wasm

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use tintramp::wasm::{
    generate_palette, palette_chart, recommend_colors, regenerate_palette, tint_label,
    toggle_tint_anchor, update_tint_color,
};

fn parse(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("valid JSON")
}

#[wasm_bindgen_test]
fn test_generate_palette_defaults() {
    let json = generate_palette("#3b82f6", "").expect("should generate");
    let palette = parse(&json);
    assert_eq!(palette["tints"].as_array().map(|t| t.len()), Some(11));
    assert_eq!(palette["tints"][5]["color"], "#3b82f6");
    assert_eq!(palette["name"], "Blue");
}

#[wasm_bindgen_test]
fn test_generate_palette_with_settings() {
    let json = generate_palette("red", r#"{"length": 5, "namingMode": "0,10,20..."}"#)
        .expect("should generate");
    let palette = parse(&json);
    assert_eq!(palette["tints"][4]["name"], "40");
}

#[wasm_bindgen_test]
fn test_generate_palette_caps_length() {
    let json = generate_palette("red", r#"{"length": 50000000}"#).expect("should generate");
    let palette = parse(&json);
    assert_eq!(palette["tints"].as_array().map(|t| t.len()), Some(256));
}

#[wasm_bindgen_test]
fn test_generate_palette_rejects_bad_seed() {
    assert!(generate_palette("nope", "").is_err());
}

#[wasm_bindgen_test]
fn test_edit_round_trip() {
    let palette = generate_palette("#3b82f6", r#"{"length": 9}"#).expect("should generate");
    let pinned = update_tint_color(&palette, 3, "#ff00ff", Some(true)).expect("should update");
    let regenerated = regenerate_palette(&pinned).expect("should regenerate");
    let value = parse(&regenerated);
    assert_eq!(value["tints"][3]["color"], "#ff00ff");
    assert_eq!(value["tints"][3]["isAnchor"], true);

    let unpinned = toggle_tint_anchor(&regenerated, 3).expect("should toggle");
    assert_eq!(parse(&unpinned)["tints"][3]["isAnchor"], false);
}

#[wasm_bindgen_test]
fn test_recommend_and_chart() {
    let sets = parse(&recommend_colors("#ff0000", "hsl").expect("should recommend"));
    assert_eq!(sets[0]["colors"][0]["color"], "#00ffff");
    assert!(recommend_colors("#ff0000", "cmyk").is_err());

    let palette = generate_palette("#3b82f6", "").expect("should generate");
    let chart = parse(&palette_chart(&palette).expect("should chart"));
    assert_eq!(chart[0]["axis"], "lightness");
}

#[wasm_bindgen_test]
fn test_tint_label() {
    assert_eq!(tint_label(10, 11, "50,100,200...900,950").expect("known mode"), "950");
    assert!(tint_label(0, 11, "bogus").is_err());
}

//! Generic hue names.
//!
//! Palettes start out named after the hue of their center color. A palette whose
//! name is still one of these generic names follows its center when it moves.

use crate::color::{Axis, Color, ColorError, ColorSpace};

/// Name given to colors too desaturated to have a meaningful hue.
pub const GRAY: &str = "Gray";

/// HSL saturation below which a color is named [`GRAY`].
const GRAY_SATURATION: f32 = 0.08;

/// Upper hue bound (exclusive, HSL degrees) and name of each hue family.
const HUE_RANGES: &[(f32, &str)] = &[
    (10.0, "Red"),
    (35.0, "Orange"),
    (45.0, "Amber"),
    (65.0, "Yellow"),
    (85.0, "Lime"),
    (140.0, "Green"),
    (160.0, "Emerald"),
    (175.0, "Teal"),
    (195.0, "Cyan"),
    (210.0, "Sky"),
    (235.0, "Blue"),
    (250.0, "Indigo"),
    (270.0, "Violet"),
    (290.0, "Purple"),
    (315.0, "Fuchsia"),
    (335.0, "Pink"),
    (350.0, "Rose"),
    (360.0, "Red"),
];

/// Every generic hue name, without duplicates.
pub fn hue_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::with_capacity(HUE_RANGES.len() + 1);
    for (_, name) in HUE_RANGES {
        if !names.contains(name) {
            names.push(*name);
        }
    }
    names.push(GRAY);
    names
}

/// Whether `name` is one of the generic hue names.
pub fn is_hue_name(name: &str) -> bool {
    hue_names().contains(&name)
}

/// Generic name of the hue family `color` belongs to.
pub fn hue_name(color: &Color) -> &'static str {
    if color.channel(Axis::Chroma, ColorSpace::Hsl) < GRAY_SATURATION {
        return GRAY;
    }
    let hue = color.hue_of(ColorSpace::Hsl);
    HUE_RANGES
        .iter()
        .find(|(bound, _)| hue < *bound)
        .map_or("Red", |(_, name)| *name)
}

/// [`hue_name`] for a hex string.
///
/// # Errors
///
/// Returns `ColorError` if `hex` is not a valid hex color.
pub fn hue_name_hex(hex: &str) -> Result<&'static str, ColorError> {
    Ok(hue_name(&Color::from_hex(hex)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hue_name_hex("#ff0000").unwrap(), "Red");
        assert_eq!(hue_name_hex("#00ff00").unwrap(), "Green");
        assert_eq!(hue_name_hex("#0000ff").unwrap(), "Indigo");
        assert_eq!(hue_name_hex("#3b82f6").unwrap(), "Blue");
        assert_eq!(hue_name_hex("#f97316").unwrap(), "Orange");
        assert_eq!(hue_name_hex("#ffff00").unwrap(), "Yellow");
    }

    #[test]
    fn test_gray() {
        assert_eq!(hue_name_hex("#000000").unwrap(), GRAY);
        assert_eq!(hue_name_hex("#ffffff").unwrap(), GRAY);
        assert_eq!(hue_name_hex("#777777").unwrap(), GRAY);
    }

    #[test]
    fn test_wraparound_red() {
        assert_eq!(hue_name_hex("#ff0011").unwrap(), "Red");
    }

    #[test]
    fn test_is_hue_name() {
        assert!(is_hue_name("Blue"));
        assert!(is_hue_name(GRAY));
        assert!(!is_hue_name("Skyline"));
        assert!(!is_hue_name("blue"));
        for (_, name) in HUE_RANGES {
            assert!(is_hue_name(name));
        }
    }

    #[test]
    fn test_hue_names_unique() {
        let names = hue_names();
        assert_eq!(names.iter().filter(|n| **n == "Red").count(), 1);
        assert!(names.contains(&GRAY));
        assert_eq!(names.len(), 18);
    }

    #[test]
    fn test_invalid_hex() {
        assert!(hue_name_hex("blue").is_err());
    }
}

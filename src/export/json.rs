//! JSON shade export.
//!
//! # Output Format
//!
//! ```json
//! {
//!   "name": "Blue",
//!   "shades": [
//!     { "name": "50", "hex": "#ebf3fe" },
//!     { "name": "100", "hex": "#c9defc" }
//!   ]
//! }
//! ```
//!
//! Shades keep ramp order, lightest first.

use serde::{Deserialize, Serialize};

use crate::export::{ExportOptions, Result};
use crate::models::PaletteBuild;

/// One exported tint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shade {
    pub name: String,
    pub hex: String,
}

/// Exported form of one palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteShades {
    pub name: String,
    pub shades: Vec<Shade>,
}

/// Tint names and hex values of `palette`, lightest first.
pub fn shades(palette: &PaletteBuild) -> Vec<(String, String)> {
    palette.tints.iter().map(|tint| (tint.name.clone(), tint.color.to_hex())).collect()
}

impl From<&PaletteBuild> for PaletteShades {
    fn from(palette: &PaletteBuild) -> Self {
        Self {
            name: palette.name.clone(),
            shades: shades(palette).into_iter().map(|(name, hex)| Shade { name, hex }).collect(),
        }
    }
}

/// Export `palette`'s shades to a JSON string.
pub fn shades_to_json(palette: &PaletteBuild, options: &ExportOptions) -> Result<String> {
    let export = PaletteShades::from(palette);
    let json = if options.pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::models::PaletteSettings;

    fn palette() -> PaletteBuild {
        let settings = PaletteSettings { length: 5, ..Default::default() };
        PaletteBuild::from_seed(Color::from_hex("#3b82f6").unwrap(), settings)
    }

    #[test]
    fn test_shades_in_ramp_order() {
        let p = palette();
        let names: Vec<String> = shades(&p).into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["50", "100", "200", "300", "350"]);
        assert_eq!(shades(&p)[2].1, "#3b82f6");
    }

    #[test]
    fn test_shades_to_json() {
        let p = palette();
        let json = shades_to_json(&p, &ExportOptions { pretty: false }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Blue");
        assert_eq!(value["shades"][2]["name"], "200");
        assert_eq!(value["shades"][2]["hex"], "#3b82f6");
        assert!(!json.contains('\n'));

        let pretty = shades_to_json(&p, &ExportOptions::default()).unwrap();
        assert!(pretty.contains('\n'));
    }
}

//! Related-palette recommendations
//!
//! Companion colors are the center color with its hue rotated by the fixed
//! offsets of a harmony, in the polar form of the palette's interpolation space.
//! Lightness and chroma are kept.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorSpace};
use crate::hues::hue_name;
use crate::models::PaletteBuild;

/// Color harmony a recommended set is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Harmony {
    /// 180 degrees apart
    Complementary,
    /// Neighbors 30 degrees either side
    Analogous,
    /// 120 degrees apart
    Triadic,
    /// 150 and 210 degrees
    SplitComplementary,
    /// Rectangle at 90, 180 and 270 degrees
    Tetradic,
}

impl Harmony {
    /// All harmonies, in the order recommendations are listed
    pub const ALL: [Harmony; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Tetradic,
    ];

    /// Hue offsets for this harmony (in degrees)
    pub fn offsets(&self) -> &'static [f32] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[-30.0, 30.0],
            Self::Triadic => &[120.0, 240.0],
            Self::SplitComplementary => &[150.0, 210.0],
            Self::Tetradic => &[90.0, 180.0, 270.0],
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complementary => write!(f, "Complementary"),
            Self::Analogous => write!(f, "Analogous"),
            Self::Triadic => write!(f, "Triadic"),
            Self::SplitComplementary => write!(f, "Split complementary"),
            Self::Tetradic => write!(f, "Tetradic"),
        }
    }
}

/// A suggested companion color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedColor {
    /// Generic hue name of `color`
    pub name: String,
    pub color: Color,
}

/// Companion colors of one harmony
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedSet {
    pub harmony: Harmony,
    pub colors: Vec<RecommendedColor>,
}

/// Recommended companion colors for `color`, one set per [`Harmony`].
pub fn recommend(color: &Color, space: ColorSpace) -> Vec<RecommendedSet> {
    Harmony::ALL
        .into_iter()
        .map(|harmony| RecommendedSet {
            harmony,
            colors: harmony
                .offsets()
                .iter()
                .map(|offset| {
                    let rotated = color.rotate_hue(*offset, space);
                    RecommendedColor { name: hue_name(&rotated).to_string(), color: rotated }
                })
                .collect(),
        })
        .collect()
}

/// Recommendations for a palette's center, in the palette's space.
///
/// A palette without a center gets no recommendations.
pub fn recommend_for(palette: &PaletteBuild) -> Vec<RecommendedSet> {
    palette
        .center()
        .map(|center| recommend(&center.color, palette.settings.interpolation_color_space))
        .unwrap_or_default()
}

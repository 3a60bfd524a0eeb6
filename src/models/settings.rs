//! Per-palette generation settings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::ColorSpace;
use crate::naming::TintsNamingMode;

/// Settings a palette's ramp is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSettings {
    /// Space interpolation and boundary mixing happen in
    #[serde(default)]
    pub interpolation_color_space: ColorSpace,
    /// Fraction (0-1) the top boundary tint is mixed toward white
    #[serde(default = "default_lightness_max")]
    pub lightness_max: f32,
    /// Fraction (0-1) the bottom boundary tint is mixed toward black
    #[serde(default = "default_lightness_min")]
    pub lightness_min: f32,
    /// Number of tints in the ramp
    #[serde(default = "default_length")]
    pub length: usize,
    /// How tints are labeled
    #[serde(default)]
    pub naming_mode: TintsNamingMode,
}

fn default_lightness_max() -> f32 {
    0.9
}

fn default_lightness_min() -> f32 {
    0.85
}

fn default_length() -> usize {
    11
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            interpolation_color_space: ColorSpace::default(),
            lightness_max: default_lightness_max(),
            lightness_min: default_lightness_min(),
            length: default_length(),
            naming_mode: TintsNamingMode::default(),
        }
    }
}

impl PaletteSettings {
    /// Shortest ramp: two boundaries around a center
    pub const MIN_LENGTH: usize = 3;
    /// Longest ramp the engine builds
    pub const MAX_LENGTH: usize = 256;

    /// Number of tints a ramp built from these settings has.
    pub fn tint_count(&self) -> usize {
        self.length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH)
    }

    /// Whiteness mix fraction, clamped to `0..=1`.
    pub fn whiteness(&self) -> f32 {
        clamp_fraction(self.lightness_max)
    }

    /// Blackness mix fraction, clamped to `0..=1`.
    pub fn blackness(&self) -> f32 {
        clamp_fraction(self.lightness_min)
    }

    /// Value of one boundary setting.
    pub fn bound(&self, bound: Bound) -> f32 {
        match bound {
            Bound::LightnessMax => self.whiteness(),
            Bound::LightnessMin => self.blackness(),
        }
    }

    /// Copy with one boundary setting replaced (clamped to `0..=1`).
    pub fn with_bound(mut self, bound: Bound, value: f32) -> Self {
        let value = clamp_fraction(value);
        match bound {
            Bound::LightnessMax => self.lightness_max = value,
            Bound::LightnessMin => self.lightness_min = value,
        }
        self
    }
}

fn clamp_fraction(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// One of the two boundary mix settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bound {
    /// Whiteness mix of the first tint
    LightnessMax,
    /// Blackness mix of the last tint
    LightnessMin,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::LightnessMax => write!(f, "lightnessMax"),
            Bound::LightnessMin => write!(f, "lightnessMin"),
        }
    }
}

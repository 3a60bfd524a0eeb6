//! Palette and tint types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::settings::PaletteSettings;
use crate::color::Color;
use crate::hues::hue_name;
use crate::ramp;

/// One entry of a ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TintBuild {
    /// Display label, derived by the naming mode or set by the user
    pub name: String,
    /// Tint color
    pub color: Color,
    /// The seed tint; exactly one per palette
    #[serde(default)]
    pub is_center: bool,
    /// Pinned against recomputation; never set on boundaries or the center
    #[serde(default)]
    pub is_anchor: bool,
}

impl TintBuild {
    /// An unpinned, non-center tint.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self { name: name.into(), color, is_center: false, is_anchor: false }
    }
}

/// A palette: an ordered light-to-dark ramp of tints built around a center color.
///
/// Values are never edited in place by the engine; every operation in
/// [`crate::edit`] returns a new palette that callers swap in by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteBuild {
    /// Stable identifier, generated once
    pub id: String,
    /// Display name; follows the center's hue while it is a generic hue name
    pub name: String,
    /// Tints, lightest first
    pub tints: Vec<TintBuild>,
    /// Generation settings
    #[serde(default)]
    pub settings: PaletteSettings,
}

impl PaletteBuild {
    /// Fresh palette around `seed`: new id, hue name, no anchors.
    pub fn from_seed(seed: Color, settings: PaletteSettings) -> Self {
        Self {
            id: new_id(),
            name: hue_name(&seed).to_string(),
            tints: ramp::fresh_tints(seed, &settings),
            settings,
        }
    }

    /// Companion palette of `source` re-seeded with `seed`.
    ///
    /// Gets a new id and a fresh ramp; the settings are copied from `source`.
    pub fn from_existing(source: &PaletteBuild, seed: Color) -> Self {
        Self::from_seed(seed, source.settings)
    }

    /// Index of the center tint, if the palette has one.
    pub fn center_index(&self) -> Option<usize> {
        self.tints.iter().position(|tint| tint.is_center)
    }

    /// The center tint, if the palette has one.
    pub fn center(&self) -> Option<&TintBuild> {
        self.tints.iter().find(|tint| tint.is_center)
    }

    /// Index of the bottom boundary tint.
    pub fn last_index(&self) -> usize {
        self.tints.len().saturating_sub(1)
    }

    /// Whether `index` is the first or last tint.
    pub fn is_boundary(&self, index: usize) -> bool {
        index == 0 || index == self.last_index()
    }

    /// Whether the tint at `index` can carry an anchor: interior and not the center.
    pub fn is_anchorable(&self, index: usize) -> bool {
        index < self.tints.len()
            && !self.is_boundary(index)
            && !self.tints[index].is_center
    }

    /// Indices of the anchored tints, in ramp order.
    pub fn anchors(&self) -> Vec<usize> {
        self.tints
            .iter()
            .enumerate()
            .filter(|(_, tint)| tint.is_anchor)
            .map(|(index, _)| index)
            .collect()
    }

    /// Hex strings of every tint, lightest first.
    pub fn hexes(&self) -> Vec<String> {
        self.tints.iter().map(|tint| tint.color.to_hex()).collect()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

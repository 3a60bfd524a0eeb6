//! Palette edits.
//!
//! Every edit takes a palette snapshot and returns the reconciled replacement.
//! Edits whose preconditions fail (unknown index, boundary or center anchor
//! toggles, empty names) return an unchanged copy; they never error.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::models::{Bound, PaletteBuild, PaletteSettings};
use crate::ramp::{self, follow_center_hue, recompute_boundaries, regenerate};

/// A single user edit of a palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaletteEdit {
    /// Replace one tint's color
    #[serde(rename_all = "camelCase")]
    UpdateColor {
        index: usize,
        color: Color,
        #[serde(default)]
        apply_anchor: Option<bool>,
    },
    /// Pin or unpin an interior tint
    ToggleAnchor { index: usize },
    /// Set the palette name
    Rename { name: String },
    /// Replace the settings and regenerate
    ApplySettings { settings: PaletteSettings },
    /// Change one boundary mix setting
    SetBoundary { bound: Bound, value: f32 },
    /// Recompute every derived tint
    Regenerate,
}

/// Apply `edit` to `palette`.
pub fn apply_edit(palette: &PaletteBuild, edit: &PaletteEdit) -> PaletteBuild {
    trace!("palette {}: {:?}", palette.id, edit);
    match edit {
        PaletteEdit::UpdateColor { index, color, apply_anchor } => {
            update_color(palette, *index, *color, *apply_anchor)
        }
        PaletteEdit::ToggleAnchor { index } => toggle_anchor(palette, *index),
        PaletteEdit::Rename { name } => rename(palette, name),
        PaletteEdit::ApplySettings { settings } => apply_settings(palette, *settings),
        PaletteEdit::SetBoundary { bound, value } => set_boundary(palette, *bound, *value),
        PaletteEdit::Regenerate => regenerate(palette),
    }
}

/// Replace the color of the tint at `index`.
///
/// Editing the center recomputes both boundary tints from the new center and
/// renames a hue-named palette; other tints wait for the next [`regenerate`].
/// `apply_anchor` pins or unpins the edited tint, see [`pin_on_direct_edit`].
pub fn update_color(
    palette: &PaletteBuild,
    index: usize,
    color: Color,
    apply_anchor: Option<bool>,
) -> PaletteBuild {
    let Some(tint) = palette.tints.get(index) else {
        debug!("palette {}: no tint at {index}, color update ignored", palette.id);
        return palette.clone();
    };

    let is_center = tint.is_center;
    let is_anchor = pin_on_direct_edit(palette, index, apply_anchor);

    let mut next = palette.clone();
    next.tints[index].color = color;
    next.tints[index].is_anchor = is_anchor;

    if is_center {
        next = recompute_boundaries(&next);
        follow_center_hue(&mut next);
    }
    next
}

/// Anchor flag a tint ends up with after its color is edited directly.
///
/// An explicit `apply_anchor` wins, otherwise the current flag is kept. The
/// boundaries and the center never carry the flag.
pub fn pin_on_direct_edit(palette: &PaletteBuild, index: usize, apply_anchor: Option<bool>) -> bool {
    if !palette.is_anchorable(index) {
        return false;
    }
    apply_anchor.unwrap_or(palette.tints[index].is_anchor)
}

/// Flip the anchor flag of the tint at `index`.
///
/// Ignored for the boundaries, the center and indices past the end.
pub fn toggle_anchor(palette: &PaletteBuild, index: usize) -> PaletteBuild {
    let mut next = palette.clone();
    if !palette.is_anchorable(index) {
        debug!("palette {}: tint {index} cannot be anchored", palette.id);
        return next;
    }
    next.tints[index].is_anchor = !next.tints[index].is_anchor;
    next
}

/// Set the palette's name.
///
/// Empty or whitespace-only names are ignored. Any other name is kept
/// literally and stops the palette from following its center's hue unless it
/// happens to be a generic hue name.
pub fn rename(palette: &PaletteBuild, name: &str) -> PaletteBuild {
    let mut next = palette.clone();
    if name.trim().is_empty() {
        debug!("palette {}: empty name ignored", palette.id);
        return next;
    }
    next.name = name.to_string();
    next
}

/// Replace the settings and recompute the whole ramp.
///
/// Anchors survive when the length is unchanged. A new length rebuilds the ramp
/// from the current center, dropping anchors and manual tint names since their
/// positions no longer exist.
pub fn apply_settings(palette: &PaletteBuild, settings: PaletteSettings) -> PaletteBuild {
    let mut next = palette.clone();
    next.settings = settings;

    if settings.tint_count() == palette.tints.len() {
        return regenerate(&next);
    }

    let Some(center) = palette.center().map(|tint| tint.color) else {
        debug!("palette {}: no center, settings stored without rebuild", palette.id);
        return next;
    };
    debug!(
        "palette {}: length {} -> {}, rebuilding ramp",
        palette.id,
        palette.tints.len(),
        settings.tint_count()
    );
    next.tints = ramp::fresh_tints(center, &settings);
    next
}

/// Change one boundary mix setting and recompute the boundary tints.
pub fn set_boundary(palette: &PaletteBuild, bound: Bound, value: f32) -> PaletteBuild {
    let mut next = palette.clone();
    next.settings = palette.settings.with_bound(bound, value);
    recompute_boundaries(&next)
}

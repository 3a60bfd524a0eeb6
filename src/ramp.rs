//! Ramp generation.
//!
//! A ramp is laid out around fixed tints: the two boundaries, the center and any
//! anchors. Boundaries are the center mixed toward white (first tint) and black
//! (last tint). Every other tint is interpolated between the nearest fixed tint on
//! each side, proportionally to its ordinal distance.

use log::{debug, trace};

use crate::color::{Color, ColorSpace};
use crate::hues::{hue_name, is_hue_name};
use crate::models::{PaletteBuild, PaletteSettings, TintBuild};
use crate::naming::tint_name;

/// Boundary colors for `center`: `(first, last)`.
///
/// The first tint is `center` mixed toward white by `lightness_max`, the last
/// is mixed toward black by `lightness_min`, both in the settings' space.
pub fn end_tints(center: &Color, settings: &PaletteSettings) -> (Color, Color) {
    let space = settings.interpolation_color_space;
    let start = center.mix(&Color::white(), settings.whiteness(), space);
    let end = center.mix(&Color::black(), settings.blackness(), space);
    (start, end)
}

/// Index the center takes in a fresh ramp of `length` tints.
pub fn center_position(length: usize) -> usize {
    length / 2
}

/// Tints of a fresh ramp around `seed`: named, no anchors, every color derived.
pub fn fresh_tints(seed: Color, settings: &PaletteSettings) -> Vec<TintBuild> {
    let length = settings.tint_count();
    let center = center_position(length);

    let mut tints: Vec<TintBuild> = (0..length)
        .map(|index| {
            let mut tint = TintBuild::new(
                tint_name(index, length, settings.naming_mode, None),
                seed,
            );
            tint.is_center = index == center;
            tint
        })
        .collect();

    set_boundaries(&mut tints, &seed, settings);
    fill_between_fixed(&mut tints, settings.interpolation_color_space);

    debug!("generated {length}-tint ramp around {seed} in {}", settings.interpolation_color_space);
    tints
}

/// Copy of `palette` with both boundary tints recomputed from its center.
///
/// Nothing else changes. A palette without a center is returned unchanged.
pub fn recompute_boundaries(palette: &PaletteBuild) -> PaletteBuild {
    let mut next = palette.clone();
    let Some(center) = palette.center().map(|tint| tint.color) else {
        debug!("palette {} has no center, boundaries left as is", palette.id);
        return next;
    };
    set_boundaries(&mut next.tints, &center, &palette.settings);
    next
}

/// Copy of `palette` with every derived tint recomputed.
///
/// Boundaries are re-mixed from the center, free tints re-interpolated between
/// their fixed neighbors and tint names re-derived from the naming mode. The
/// center and anchored tints keep their colors. Regenerating a regenerated
/// palette changes nothing.
pub fn regenerate(palette: &PaletteBuild) -> PaletteBuild {
    let mut next = recompute_boundaries(palette);
    if next.center_index().is_none() {
        return next;
    }
    fill_between_fixed(&mut next.tints, next.settings.interpolation_color_space);
    rename_tints(&mut next.tints, &next.settings);
    trace!("regenerated palette {} ({} anchors)", next.id, next.anchors().len());
    next
}

/// Rename `palette` after its center's hue if it still carries a generic hue name.
pub(crate) fn follow_center_hue(palette: &mut PaletteBuild) {
    if !is_hue_name(&palette.name) {
        return;
    }
    if let Some(center) = palette.center() {
        let name = hue_name(&center.color);
        if palette.name != name {
            debug!("palette {} renamed {} -> {}", palette.id, palette.name, name);
            palette.name = name.to_string();
        }
    }
}

/// Re-derive every tint name; manual mode keeps non-empty names.
pub(crate) fn rename_tints(tints: &mut [TintBuild], settings: &PaletteSettings) {
    let length = tints.len();
    for (index, tint) in tints.iter_mut().enumerate() {
        tint.name = tint_name(index, length, settings.naming_mode, Some(&tint.name));
    }
}

fn set_boundaries(tints: &mut [TintBuild], center: &Color, settings: &PaletteSettings) {
    if tints.len() < 2 {
        return;
    }
    let (start, end) = end_tints(center, settings);
    let last = tints.len() - 1;
    tints[0].color = start;
    tints[last].color = end;
}

/// Interpolate every tint lying strictly between two consecutive fixed tints.
fn fill_between_fixed(tints: &mut [TintBuild], space: ColorSpace) {
    let fixed = fixed_indices(tints);
    for pair in fixed.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (from, to) = (tints[a].color, tints[b].color);
        let span = (b - a) as f32;
        for (offset, tint) in tints[a + 1..b].iter_mut().enumerate() {
            let t = (offset + 1) as f32 / span;
            tint.color = from.interpolate(&to, t, space);
        }
    }
}

/// Boundaries, center and anchors, in ramp order.
fn fixed_indices(tints: &[TintBuild]) -> Vec<usize> {
    let last = tints.len().saturating_sub(1);
    tints
        .iter()
        .enumerate()
        .filter(|(index, tint)| *index == 0 || *index == last || tint.is_center || tint.is_anchor)
        .map(|(index, _)| index)
        .collect()
}

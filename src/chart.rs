//! Chart series for palette inspection.
//!
//! Each axis projects the ramp's channel values into two plottable sides that
//! meet at the center tint: `left` runs from the first tint to the center and
//! `right` from the center to the last tint. Series are derived on every call.

use serde::{Deserialize, Serialize};

use crate::color::Axis;
use crate::edit::set_boundary;
use crate::models::{Bound, PaletteBuild};

/// One plotted tint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Position of the tint in the ramp
    pub index: usize,
    pub name: String,
    pub value: f32,
}

/// Half of an axis, ending or starting at the center tint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSide {
    pub points: Vec<ChartPoint>,
    /// Boundary setting dragging this side changes, if any
    pub target: Option<Bound>,
}

impl AxisSide {
    /// Apply a value dragged on this side.
    ///
    /// Sides with a target set it (clamped to `0..=1`) and recompute the
    /// boundary tints; sides without one return the palette unchanged.
    pub fn update(&self, palette: &PaletteBuild, value: f32) -> PaletteBuild {
        match self.target {
            Some(bound) => set_boundary(palette, bound, value),
            None => palette.clone(),
        }
    }
}

/// Series of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSeries {
    pub axis: Axis,
    pub left: AxisSide,
    pub right: AxisSide,
}

/// Series for every axis, in [`Axis::ALL`] order.
///
/// A palette without a center has nothing to split on and yields no series.
pub fn chart_series(palette: &PaletteBuild) -> Vec<AxisSeries> {
    Axis::ALL
        .into_iter()
        .filter_map(|axis| axis_series(palette, axis))
        .collect()
}

/// Series of a single axis, measured in the polar form of the palette's space.
pub fn axis_series(palette: &PaletteBuild, axis: Axis) -> Option<AxisSeries> {
    let center = palette.center_index()?;
    let space = palette.settings.interpolation_color_space;

    let points: Vec<ChartPoint> = palette
        .tints
        .iter()
        .enumerate()
        .map(|(index, tint)| ChartPoint {
            index,
            name: tint.name.clone(),
            value: tint.color.channel(axis, space),
        })
        .collect();

    let (left_target, right_target) = match axis {
        Axis::Lightness => (Some(Bound::LightnessMax), Some(Bound::LightnessMin)),
        Axis::Chroma | Axis::Hue => (None, None),
    };

    Some(AxisSeries {
        axis,
        left: AxisSide { points: points[..=center].to_vec(), target: left_target },
        right: AxisSide { points: points[center..].to_vec(), target: right_target },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, ColorSpace};
    use crate::models::PaletteSettings;
    use crate::ramp::end_tints;

    fn palette(length: usize) -> PaletteBuild {
        let settings = PaletteSettings { length, ..Default::default() };
        PaletteBuild::from_seed(Color::from_hex("#3b82f6").unwrap(), settings)
    }

    #[test]
    fn test_axes_in_order() {
        let series = chart_series(&palette(9));
        let axes: Vec<Axis> = series.iter().map(|s| s.axis).collect();
        assert_eq!(axes, vec![Axis::Lightness, Axis::Chroma, Axis::Hue]);
    }

    #[test]
    fn test_sides_meet_at_center() {
        let p = palette(9);
        for series in chart_series(&p) {
            let left: Vec<usize> = series.left.points.iter().map(|pt| pt.index).collect();
            let right: Vec<usize> = series.right.points.iter().map(|pt| pt.index).collect();
            assert_eq!(left, (0..=4).collect::<Vec<_>>());
            assert_eq!(right, (4..=8).collect::<Vec<_>>());
            assert_eq!(series.left.points.last(), series.right.points.first());
        }
    }

    #[test]
    fn test_points_carry_names_and_values() {
        let p = palette(11);
        let lightness = axis_series(&p, Axis::Lightness).unwrap();
        assert_eq!(lightness.left.points[0].name, "50");
        assert_eq!(lightness.right.points.last().map(|pt| pt.name.as_str()), Some("950"));
        let expected = p.tints[0].color.channel(Axis::Lightness, ColorSpace::Oklch);
        assert_eq!(lightness.left.points[0].value, expected);
        assert!(lightness.left.points[0].value > lightness.right.points[5].value);
    }

    #[test]
    fn test_only_lightness_has_targets() {
        let series = chart_series(&palette(9));
        assert_eq!(series[0].left.target, Some(Bound::LightnessMax));
        assert_eq!(series[0].right.target, Some(Bound::LightnessMin));
        for s in &series[1..] {
            assert_eq!(s.left.target, None);
            assert_eq!(s.right.target, None);
        }
    }

    #[test]
    fn test_lightness_update_sets_bound() {
        let p = palette(9);
        let lightness = axis_series(&p, Axis::Lightness).unwrap();

        let next = lightness.left.update(&p, 0.5);
        assert_eq!(next.settings.lightness_max, 0.5);
        let (start, _) = end_tints(&p.tints[4].color, &next.settings);
        assert_eq!(next.tints[0].color, start);

        let next = lightness.right.update(&p, 0.25);
        assert_eq!(next.settings.lightness_min, 0.25);
        assert_eq!(next.settings.lightness_max, p.settings.lightness_max);
    }

    #[test]
    fn test_untargeted_update_is_noop() {
        let p = palette(9);
        let hue = axis_series(&p, Axis::Hue).unwrap();
        assert_eq!(hue.left.update(&p, 0.1), p);
        assert_eq!(hue.right.update(&p, 0.1), p);
    }

    #[test]
    fn test_no_center_no_series() {
        let mut p = palette(5);
        p.tints[2].is_center = false;
        assert!(chart_series(&p).is_empty());
    }
}

//! Color values and color-space arithmetic
//!
//! A [`Color`] is an immutable sRGB value. All arithmetic (interpolation, mixing,
//! hue rotation, channel reads) happens in a selectable [`ColorSpace`]:
//! - Polar: `oklch`, `lch`, `hsl` (hue interpolates along the shorter arc)
//! - Rectangular: `oklab`, `lab`, `srgb`
//!
//! Parsing accepts:
//! - Hex: `#RGB`, `#RRGGBB`
//! - Functional and named CSS colors (`rgb()`, `hsl()`, `oklch()`, `red`, ...) via
//!   `lightningcss`

use std::fmt;
use std::str::FromStr;

use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use palette::{FromColor, Hsl, Lab, Lch, Oklab, Oklch, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3 or 6 hex chars after #)
    #[error("invalid color length {0}, expected 3 or 6")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// CSS parsing error from lightningcss
    #[error("CSS parse error: {0}")]
    CssParse(String),
    /// Unknown interpolation color space name
    #[error("unknown color space '{0}'")]
    UnknownSpace(String),
}

/// Color space in which interpolation and mixing arithmetic is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Oklab in cylindrical form (lightness, chroma, hue)
    #[default]
    Oklch,
    /// Oklab
    Oklab,
    /// CIE LCh(ab), D65 white point
    Lch,
    /// CIE L*a*b*, D65 white point
    Lab,
    /// sRGB hue, saturation, lightness
    Hsl,
    /// Gamma-encoded sRGB
    Srgb,
}

impl ColorSpace {
    /// All supported spaces, in display order
    pub const ALL: [ColorSpace; 6] = [
        ColorSpace::Oklch,
        ColorSpace::Oklab,
        ColorSpace::Lch,
        ColorSpace::Lab,
        ColorSpace::Hsl,
        ColorSpace::Srgb,
    ];

    /// Lowercase name as used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSpace::Oklch => "oklch",
            ColorSpace::Oklab => "oklab",
            ColorSpace::Lch => "lch",
            ColorSpace::Lab => "lab",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Srgb => "srgb",
        }
    }

    /// The cylindrical space hue and chroma are measured in for this space.
    ///
    /// Oklab-family spaces map to `oklch`, CIE spaces to `lch` and the RGB
    /// spaces to `hsl`.
    pub fn polar(&self) -> ColorSpace {
        match self {
            ColorSpace::Oklch | ColorSpace::Oklab => ColorSpace::Oklch,
            ColorSpace::Lch | ColorSpace::Lab => ColorSpace::Lch,
            ColorSpace::Hsl | ColorSpace::Srgb => ColorSpace::Hsl,
        }
    }

    /// Coordinate slots as (lightness, chroma, hue) for polar spaces.
    fn polar_slots(&self) -> Option<PolarSlots> {
        match self {
            ColorSpace::Oklch => Some(PolarSlots { lightness: 0, chroma: 1, hue: 2, achromatic: 1e-4 }),
            ColorSpace::Lch => Some(PolarSlots { lightness: 0, chroma: 1, hue: 2, achromatic: 1e-2 }),
            ColorSpace::Hsl => Some(PolarSlots { lightness: 2, chroma: 1, hue: 0, achromatic: 1e-4 }),
            _ => None,
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.as_str() == lower)
            .ok_or_else(|| ColorError::UnknownSpace(s.to_string()))
    }
}

/// Channel read by [`Color::channel`], measured in the polar form of a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Perceived lightness, normalized to 0-1
    Lightness,
    /// Chroma (saturation for HSL)
    Chroma,
    /// Hue angle in degrees
    Hue,
}

impl Axis {
    /// All axes in chart order
    pub const ALL: [Axis; 3] = [Axis::Lightness, Axis::Chroma, Axis::Hue];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Lightness => write!(f, "lightness"),
            Axis::Chroma => write!(f, "chroma"),
            Axis::Hue => write!(f, "hue"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PolarSlots {
    lightness: usize,
    chroma: usize,
    hue: usize,
    /// Chroma below which the hue is considered powerless
    achromatic: f32,
}

/// An immutable color value.
///
/// Stored as 8-bit sRGB, so two colors are equal exactly when their hex strings
/// are. Every operation returns a new value. Serializes as its lowercase
/// `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    rgb: [u8; 3],
}

impl Color {
    /// Build a color from 8-bit sRGB components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Pure white, the target of top-boundary mixing.
    pub fn white() -> Self {
        Self::from_rgb8(255, 255, 255)
    }

    /// Pure black, the target of bottom-boundary mixing.
    pub fn black() -> Self {
        Self::from_rgb8(0, 0, 0)
    }

    /// Parse a `#RGB` or `#RRGGBB` hex string.
    ///
    /// # Errors
    ///
    /// Returns `ColorError` if the string is empty, lacks the `#`, has the wrong
    /// length or contains non-hex characters.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        let Some(hex) = s.strip_prefix('#') else {
            return Err(ColorError::MissingHash);
        };

        // Validate all characters are hex
        for c in hex.chars() {
            if !c.is_ascii_hexdigit() {
                return Err(ColorError::InvalidHex(c));
            }
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB (doubled digits)
                let digits: Vec<u8> =
                    hex.chars().map(parse_hex_digit).collect::<Result<_, _>>()?;
                Ok(Self::from_rgb8(digits[0] * 17, digits[1] * 17, digits[2] * 17))
            }
            6 => {
                let r = parse_hex_pair(&hex[0..2])?;
                let g = parse_hex_pair(&hex[2..4])?;
                let b = parse_hex_pair(&hex[4..6])?;
                Ok(Self::from_rgb8(r, g, b))
            }
            len => Err(ColorError::InvalidLength(len)),
        }
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// 8-bit sRGB components.
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.rgb
    }

    fn srgb(&self) -> Srgb<f32> {
        let [r, g, b] = self.rgb;
        Srgb::new(r, g, b).into_format()
    }

    /// Linear interpolation of both colors' coordinates in `space`.
    ///
    /// `t` is clamped to `0..=1`; the endpoints are returned unchanged at 0 and 1.
    pub fn interpolate(&self, other: &Color, t: f32, space: ColorSpace) -> Color {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }

        let mut from = self.coords(space);
        let mut to = other.coords(space);

        if let Some(slots) = space.polar_slots() {
            // A powerless hue borrows the other endpoint's hue
            if from[slots.chroma] < slots.achromatic {
                from[slots.hue] = to[slots.hue];
            } else if to[slots.chroma] < slots.achromatic {
                to[slots.hue] = from[slots.hue];
            }
        }

        let mut out = [0.0f32; 3];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = match space.polar_slots() {
                Some(slots) if slots.hue == i => lerp_hue(from[i], to[i], t),
                _ => from[i] + (to[i] - from[i]) * t,
            };
        }

        Color::from_coords(space, out)
    }

    /// Mix this color toward `towards` by `fraction` (0 keeps it, 1 reaches `towards`).
    pub fn mix(&self, towards: &Color, fraction: f32, space: ColorSpace) -> Color {
        self.interpolate(towards, fraction, space)
    }

    /// Hue in degrees (`0..360`) in the polar form of `space`.
    pub fn hue_of(&self, space: ColorSpace) -> f32 {
        self.channel(Axis::Hue, space)
    }

    /// Rotate the hue by `degrees` in the polar form of `space`, keeping lightness
    /// and chroma.
    pub fn rotate_hue(&self, degrees: f32, space: ColorSpace) -> Color {
        let polar = space.polar();
        let mut coords = self.coords(polar);
        if let Some(slots) = polar.polar_slots() {
            coords[slots.hue] = (coords[slots.hue] + degrees).rem_euclid(360.0);
        }
        Color::from_coords(polar, coords)
    }

    /// Read one channel in the polar form of `space`.
    ///
    /// Lightness is normalized to `0..=1` for every space so series from
    /// different spaces share a scale.
    pub fn channel(&self, axis: Axis, space: ColorSpace) -> f32 {
        let polar = space.polar();
        let coords = self.coords(polar);
        let Some(slots) = polar.polar_slots() else {
            return 0.0;
        };
        match axis {
            Axis::Lightness if polar == ColorSpace::Lch => coords[slots.lightness] / 100.0,
            Axis::Lightness => coords[slots.lightness],
            Axis::Chroma => coords[slots.chroma],
            Axis::Hue => coords[slots.hue].rem_euclid(360.0),
        }
    }

    /// Coordinates of this color in `space`, hue in positive degrees.
    fn coords(&self, space: ColorSpace) -> [f32; 3] {
        let rgb = self.srgb();
        match space {
            ColorSpace::Oklch => {
                let c: Oklch<f32> = Oklch::from_color(rgb);
                [c.l, c.chroma, c.hue.into_positive_degrees()]
            }
            ColorSpace::Oklab => {
                let c: Oklab<f32> = Oklab::from_color(rgb);
                [c.l, c.a, c.b]
            }
            ColorSpace::Lch => {
                let c: Lch = Lch::from_color(rgb);
                [c.l, c.chroma, c.hue.into_positive_degrees()]
            }
            ColorSpace::Lab => {
                let c: Lab = Lab::from_color(rgb);
                [c.l, c.a, c.b]
            }
            ColorSpace::Hsl => {
                let c: Hsl = Hsl::from_color(rgb);
                [c.hue.into_positive_degrees(), c.saturation, c.lightness]
            }
            ColorSpace::Srgb => [rgb.red, rgb.green, rgb.blue],
        }
    }

    /// Build a gamut-clamped color from coordinates in `space`.
    fn from_coords(space: ColorSpace, c: [f32; 3]) -> Color {
        let rgb: Srgb<f32> = match space {
            ColorSpace::Oklch => {
                let oklch: Oklch<f32> = Oklch::new(c[0], c[1], c[2]);
                Srgb::from_color(oklch)
            }
            ColorSpace::Oklab => {
                let oklab: Oklab<f32> = Oklab::new(c[0], c[1], c[2]);
                Srgb::from_color(oklab)
            }
            ColorSpace::Lch => {
                let lch: Lch = Lch::new(c[0], c[1], c[2]);
                Srgb::from_color(lch)
            }
            ColorSpace::Lab => {
                let lab: Lab = Lab::new(c[0], c[1], c[2]);
                Srgb::from_color(lab)
            }
            ColorSpace::Hsl => {
                let hsl: Hsl = Hsl::new(c[0], c[1], c[2]);
                Srgb::from_color(hsl)
            }
            ColorSpace::Srgb => Srgb::new(c[0], c[1], c[2]),
        };
        Color::from_rgb8(channel_to_u8(rgb.red), channel_to_u8(rgb.green), channel_to_u8(rgb.blue))
    }
}

/// Quantize one sRGB channel, clamping to gamut. NaN from degenerate
/// conversions maps to zero.
fn channel_to_u8(c: f32) -> u8 {
    if c.is_nan() {
        return 0;
    }
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Interpolate two hue angles along the shorter arc.
fn lerp_hue(from: f32, to: f32, t: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    (from + delta * t).rem_euclid(360.0)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a CSS color string into a [`Color`].
///
/// # Supported Formats
///
/// - `#RGB`, `#RRGGBB` hex (alpha forms are rejected, tints are opaque)
/// - `rgb()`, `hsl()`, `hwb()`, `oklch()` and other CSS functional notations
/// - CSS named colors such as `red` or `rebeccapurple`
///
/// # Examples
///
/// ```
/// use tintramp::color::parse_color;
///
/// let blue = parse_color("#3B82F6").unwrap();
/// assert_eq!(blue.to_hex(), "#3b82f6");
///
/// let red = parse_color("hsl(0, 100%, 50%)").unwrap();
/// assert_eq!(red.to_hex(), "#ff0000");
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is invalid or unparseable.
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    // Fast path for hex colors
    if s.starts_with('#') {
        return Color::from_hex(s);
    }

    // Use lightningcss for all other CSS color formats
    parse_css_color(s)
}

/// Parse a CSS color using lightningcss (rgb, hsl, hwb, oklch, named colors)
fn parse_css_color(s: &str) -> Result<Color, ColorError> {
    use lightningcss::values::color::FloatColor;

    let css_color = CssColor::parse_string(s).map_err(|e| ColorError::CssParse(e.to_string()))?;

    // Convert to sRGB color space first, then extract the components
    let rgb_color = css_color
        .to_rgb()
        .map_err(|_| ColorError::CssParse("cannot convert color to RGB".to_string()))?;

    match rgb_color {
        CssColor::RGBA(rgba) => Ok(Color::from_rgb8(rgba.red, rgba.green, rgba.blue)),
        CssColor::Float(float_color) => match float_color.as_ref() {
            FloatColor::RGB(rgb) => {
                Ok(Color::from_rgb8(channel_to_u8(rgb.r), channel_to_u8(rgb.g), channel_to_u8(rgb.b)))
            }
            _ => Err(ColorError::CssParse("unexpected float color format".to_string())),
        },
        _ => Err(ColorError::CssParse("color conversion did not produce RGB".to_string())),
    }
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c))
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut value = 0u8;
    for c in s.chars() {
        value = value * 16 + parse_hex_digit(c)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn test_hex_round_trip() {
        for s in ["#000000", "#ffffff", "#3b82f6", "#0f380f", "#abcdef", "#7f7f7f"] {
            assert_eq!(hex(s).to_hex(), s);
        }
    }

    #[test]
    fn test_hex_uppercase_normalizes() {
        let once = hex("#3B82F6").to_hex();
        assert_eq!(once, "#3b82f6");
        assert_eq!(hex(&once).to_hex(), once);
    }

    #[test]
    fn test_short_hex() {
        assert_eq!(hex("#F00").to_hex(), "#ff0000");
        assert_eq!(hex("#abc").to_hex(), "#aabbcc");
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(Color::from_hex(""), Err(ColorError::Empty));
        assert_eq!(Color::from_hex("3b82f6"), Err(ColorError::MissingHash));
        assert_eq!(Color::from_hex("#3b82"), Err(ColorError::InvalidLength(4)));
        assert_eq!(Color::from_hex("#3b82f6ff"), Err(ColorError::InvalidLength(8)));
        assert_eq!(Color::from_hex("#GG0000"), Err(ColorError::InvalidHex('G')));
    }

    #[test]
    fn test_parse_css_colors() {
        assert_eq!(parse_color("red").unwrap().to_hex(), "#ff0000");
        assert_eq!(parse_color("rgb(0, 255, 0)").unwrap().to_hex(), "#00ff00");
        assert_eq!(parse_color("  #0000ff ").unwrap().to_hex(), "#0000ff");
        assert!(parse_color("notacolor").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_interpolate_endpoints_exact() {
        let a = hex("#3b82f6");
        let b = hex("#f97316");
        for space in ColorSpace::ALL {
            assert_eq!(a.interpolate(&b, 0.0, space), a);
            assert_eq!(a.interpolate(&b, 1.0, space), b);
        }
    }

    #[test]
    fn test_interpolate_srgb_midpoint() {
        let mid = Color::black().interpolate(&Color::white(), 0.5, ColorSpace::Srgb);
        assert_eq!(mid.to_hex(), "#808080");
    }

    #[test]
    fn test_mix_toward_white_gets_lighter() {
        let blue = hex("#3b82f6");
        for space in ColorSpace::ALL {
            let light = blue.mix(&Color::white(), 0.9, space);
            let dark = blue.mix(&Color::black(), 0.85, space);
            let l = |c: &Color| c.channel(Axis::Lightness, ColorSpace::Oklch);
            assert!(l(&light) > l(&blue), "{space}: mix toward white should lighten");
            assert!(l(&dark) < l(&blue), "{space}: mix toward black should darken");
        }
    }

    #[test]
    fn test_mix_keeps_hue_toward_achromatic() {
        let blue = hex("#3b82f6");
        let light = blue.mix(&Color::white(), 0.5, ColorSpace::Oklch);
        let diff = (light.hue_of(ColorSpace::Oklch) - blue.hue_of(ColorSpace::Oklch)).abs();
        assert!(diff < 3.0, "hue drifted by {diff}");
    }

    #[test]
    fn test_lerp_hue_short_arc() {
        assert!((lerp_hue(350.0, 10.0, 0.5) - 0.0).abs() < 1e-3);
        assert!((lerp_hue(10.0, 350.0, 0.5) - 0.0).abs() < 1e-3);
        assert!((lerp_hue(90.0, 180.0, 0.5) - 135.0).abs() < 1e-3);
    }

    #[test]
    fn test_rotate_hue() {
        let red = hex("#ff0000");
        let cyan = red.rotate_hue(180.0, ColorSpace::Hsl);
        assert_eq!(cyan.to_hex(), "#00ffff");
        let back = red.rotate_hue(360.0, ColorSpace::Hsl);
        assert_eq!(back.to_hex(), "#ff0000");
    }

    #[test]
    fn test_hue_of_primary() {
        assert!((hex("#00ff00").hue_of(ColorSpace::Hsl) - 120.0).abs() < 0.5);
        assert!((hex("#0000ff").hue_of(ColorSpace::Srgb) - 240.0).abs() < 0.5);
    }

    #[test]
    fn test_lightness_is_normalized() {
        for space in ColorSpace::ALL {
            let white = Color::white().channel(Axis::Lightness, space);
            let black = Color::black().channel(Axis::Lightness, space);
            assert!((white - 1.0).abs() < 0.01, "{space}: white lightness {white}");
            assert!(black.abs() < 0.01, "{space}: black lightness {black}");
        }
    }

    #[test]
    fn test_color_space_from_str() {
        assert_eq!("OKLCH".parse::<ColorSpace>(), Ok(ColorSpace::Oklch));
        assert_eq!("srgb".parse::<ColorSpace>(), Ok(ColorSpace::Srgb));
        assert!(matches!("cmyk".parse::<ColorSpace>(), Err(ColorError::UnknownSpace(_))));
    }

    #[test]
    fn test_serde_as_hex() {
        let json = serde_json::to_string(&hex("#3B82F6")).unwrap();
        assert_eq!(json, "\"#3b82f6\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hex("#3b82f6"));
        assert!(serde_json::from_str::<Color>("\"#zz\"").is_err());
    }
}

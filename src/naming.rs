//! Tint naming schemes.
//!
//! Maps a tint's position in a ramp to its display label. The offset scales
//! (`5,10,20...90,95` and `50,100,200...900,950`) label the first tint with the
//! offset and move the last tint outward for ramps longer than 11 tints and
//! inward otherwise, so an 11-tint ramp ends on `950` and a 12-tint ramp on `1150`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Naming scheme for the tints of a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TintsNamingMode {
    /// 5, 10, 20, ... 90, 95
    #[serde(rename = "5,10,20...90,95")]
    FiveTen,
    /// 50, 100, 200, ... 900, 950
    #[default]
    #[serde(rename = "50,100,200...900,950")]
    FiftyHundred,
    /// 0, 10, 20, ...
    #[serde(rename = "0,10,20...")]
    ZeroTen,
    /// 0, 100, 200, ...
    #[serde(rename = "0,100,200...")]
    ZeroHundred,
    /// Names are set by the user
    #[serde(rename = "manual")]
    Manual,
}

/// Error for an unrecognized naming mode string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tints naming mode '{0}'")]
pub struct UnknownNamingMode(pub String);

/// How a naming mode turns an index into a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NamingRule {
    /// `index * step`, first tint `offset`, last tint pushed out or pulled in by `offset`
    Offset { step: i64, offset: i64 },
    /// `index * step`
    Linear { step: i64 },
}

impl TintsNamingMode {
    /// All modes in the order a settings form lists them
    pub const ALL: [TintsNamingMode; 5] = [
        TintsNamingMode::FiftyHundred,
        TintsNamingMode::FiveTen,
        TintsNamingMode::ZeroTen,
        TintsNamingMode::ZeroHundred,
        TintsNamingMode::Manual,
    ];

    /// The mode string as stored in settings
    pub fn as_str(&self) -> &'static str {
        match self {
            TintsNamingMode::FiveTen => "5,10,20...90,95",
            TintsNamingMode::FiftyHundred => "50,100,200...900,950",
            TintsNamingMode::ZeroTen => "0,10,20...",
            TintsNamingMode::ZeroHundred => "0,100,200...",
            TintsNamingMode::Manual => "manual",
        }
    }

    /// Manual mode labels unnamed tints like `50,100,200...900,950`.
    fn rule(&self) -> NamingRule {
        match self {
            TintsNamingMode::FiveTen => NamingRule::Offset { step: 10, offset: 5 },
            TintsNamingMode::FiftyHundred | TintsNamingMode::Manual => {
                NamingRule::Offset { step: 100, offset: 50 }
            }
            TintsNamingMode::ZeroTen => NamingRule::Linear { step: 10 },
            TintsNamingMode::ZeroHundred => NamingRule::Linear { step: 100 },
        }
    }
}

impl fmt::Display for TintsNamingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TintsNamingMode {
    type Err = UnknownNamingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TintsNamingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| UnknownNamingMode(s.to_string()))
    }
}

/// Label for the tint at `index` in a ramp of `length` tints.
///
/// In manual mode a non-empty `existing_name` is returned as is; otherwise the
/// `50,100,200...900,950` label is returned and the caller decides whether to
/// keep it.
///
/// # Examples
///
/// ```
/// use tintramp::naming::{tint_name, TintsNamingMode};
///
/// let mode = TintsNamingMode::FiftyHundred;
/// assert_eq!(tint_name(0, 11, mode, None), "50");
/// assert_eq!(tint_name(5, 11, mode, None), "500");
/// assert_eq!(tint_name(10, 11, mode, None), "950");
/// assert_eq!(tint_name(11, 12, mode, None), "1150");
/// ```
pub fn tint_name(
    index: usize,
    length: usize,
    mode: TintsNamingMode,
    existing_name: Option<&str>,
) -> String {
    if mode == TintsNamingMode::Manual {
        if let Some(name) = existing_name.filter(|n| !n.is_empty()) {
            return name.to_string();
        }
    }

    let i = index as i64;
    match mode.rule() {
        NamingRule::Offset { step, offset } => {
            if length == 1 || index == 0 {
                return offset.to_string();
            }
            if index + 1 == length {
                let shift = if length > 11 { offset } else { -offset };
                return (i * step + shift).to_string();
            }
            (i * step).to_string()
        }
        NamingRule::Linear { step } => (i * step).to_string(),
    }
}

/// Labels for every tint of a ramp of `length` tints.
pub fn tint_names(length: usize, mode: TintsNamingMode) -> Vec<String> {
    (0..length).map(|index| tint_name(index, length, mode, None)).collect()
}

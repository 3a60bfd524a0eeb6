//! Configuration schema types for `tintramp.toml`
//!
//! Defines the structure and validation rules for tintramp configuration.

use serde::{Deserialize, Serialize};

use crate::color::ColorSpace;
use crate::models::PaletteSettings;
use crate::naming::TintsNamingMode;

/// Output format of CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// JSON document
    Json,
    /// CSS custom properties
    Css,
    /// JSON list of tint names and hex values
    Shades,
}

/// Palette settings new ramps start from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Interpolation color space
    #[serde(default)]
    pub space: ColorSpace,
    /// Whiteness mix of the first tint (0-1)
    #[serde(default = "default_lightness_max")]
    pub lightness_max: f32,
    /// Blackness mix of the last tint (0-1)
    #[serde(default = "default_lightness_min")]
    pub lightness_min: f32,
    /// Number of tints
    #[serde(default = "default_length")]
    pub length: usize,
    /// Tint naming mode
    #[serde(default)]
    pub naming: TintsNamingMode,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            space: ColorSpace::default(),
            lightness_max: default_lightness_max(),
            lightness_min: default_lightness_min(),
            length: default_length(),
            naming: TintsNamingMode::default(),
        }
    }
}

fn default_lightness_max() -> f32 {
    PaletteSettings::default().lightness_max
}

fn default_lightness_min() -> f32 {
    PaletteSettings::default().lightness_min
}

fn default_length() -> usize {
    PaletteSettings::default().length
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when a command gets no `--format`
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::default(), pretty: true }
    }
}

fn default_true() -> bool {
    true
}

/// Complete tintramp.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TintrampConfig {
    /// Default palette settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "defaults.length")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tintramp.toml: '{}' {}", self.field, self.message)
    }
}

impl TintrampConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("defaults.lightness_max", self.defaults.lightness_max),
            ("defaults.lightness_min", self.defaults.lightness_min),
        ] {
            if !(0.0..=1.0).contains(&value) {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be between 0 and 1".to_string(),
                });
            }
        }

        if self.defaults.length < PaletteSettings::MIN_LENGTH {
            errors.push(ConfigValidationError {
                field: "defaults.length".to_string(),
                message: format!("must be at least {}", PaletteSettings::MIN_LENGTH),
            });
        } else if self.defaults.length > PaletteSettings::MAX_LENGTH {
            errors.push(ConfigValidationError {
                field: "defaults.length".to_string(),
                message: format!("must be at most {}", PaletteSettings::MAX_LENGTH),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Palette settings described by the `[defaults]` table
    pub fn to_settings(&self) -> PaletteSettings {
        PaletteSettings {
            interpolation_color_space: self.defaults.space,
            lightness_max: self.defaults.lightness_max,
            lightness_min: self.defaults.lightness_min,
            length: self.defaults.length,
            naming_mode: self.defaults.naming,
        }
    }
}

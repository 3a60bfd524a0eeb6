//! Configuration loading and discovery for `tintramp.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::{OutputFormat, TintrampConfig};
use crate::color::ColorSpace;
use crate::naming::TintsNamingMode;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file
pub const CONFIG_FILE: &str = "tintramp.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse tintramp.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override interpolation color space
    pub space: Option<ColorSpace>,
    /// Override whiteness mix of the first tint
    pub lightness_max: Option<f32>,
    /// Override blackness mix of the last tint
    pub lightness_min: Option<f32>,
    /// Override ramp length
    pub length: Option<usize>,
    /// Override tint naming mode
    pub naming: Option<TintsNamingMode>,
    /// Override output format
    pub format: Option<OutputFormat>,
}

/// Find tintramp.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for tintramp.toml
/// 2. Check XDG_CONFIG_HOME/tintramp/tintramp.toml (or ~/.config/tintramp/tintramp.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find tintramp.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("tintramp").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find tintramp.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a tintramp.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
///
/// # Example
/// ```ignore
/// // Load from discovered config
/// let config = load_config(None)?;
///
/// // Load from specific path
/// let config = load_config(Some(Path::new("brand/tintramp.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<TintrampConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<TintrampConfig, ConfigError> {
    log::debug!("loading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let config: TintrampConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Configuration used when no tintramp.toml is found.
pub fn default_config() -> TintrampConfig {
    TintrampConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut TintrampConfig, overrides: &CliOverrides) {
    if let Some(space) = overrides.space {
        config.defaults.space = space;
    }
    if let Some(lightness_max) = overrides.lightness_max {
        config.defaults.lightness_max = lightness_max;
    }
    if let Some(lightness_min) = overrides.lightness_min {
        config.defaults.lightness_min = lightness_min;
    }
    if let Some(length) = overrides.length {
        config.defaults.length = length;
    }
    if let Some(naming) = overrides.naming {
        config.defaults.naming = naming;
    }
    if let Some(format) = overrides.format {
        config.output.format = format;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaletteSettings;
    use serial_test::serial;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents.as_bytes())
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[defaults]\nlength = 9");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[defaults]\nlength = 9");

        let subdir = temp.path().join("brand").join("colors");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        assert_eq!(find_config_from(temp.path().to_path_buf()), None);
    }

    #[test]
    #[serial]
    fn test_find_xdg_config() {
        let temp = TempDir::new().expect("should create temp dir");
        let dir = temp.path().join("tintramp");
        fs::create_dir_all(&dir).expect("should create config dir");
        let config_path = write_config(&dir, "");

        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", temp.path());
        let found = find_xdg_config();
        match previous {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            r#"
[defaults]
space = "oklab"
length = 7
naming = "5,10,20...90,95"
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.defaults.space, ColorSpace::Oklab);
        assert_eq!(config.defaults.length, 7);
        assert_eq!(config.defaults.naming, TintsNamingMode::FiveTen);
        assert_eq!(config.defaults.lightness_max, 0.9);
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[defaults]\nlength = 1\nlightness_max = 2.0");

        match load_config(Some(&config_path)) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config() {
        assert_eq!(default_config().to_settings(), PaletteSettings::default());
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = default_config();
        let overrides = CliOverrides {
            space: Some(ColorSpace::Hsl),
            length: Some(5),
            format: Some(OutputFormat::Css),
            ..Default::default()
        };

        merge_cli_overrides(&mut config, &overrides);
        assert_eq!(config.defaults.space, ColorSpace::Hsl);
        assert_eq!(config.defaults.length, 5);
        assert_eq!(config.defaults.lightness_min, 0.85);
        assert_eq!(config.output.format, OutputFormat::Css);
    }

    #[test]
    fn test_merge_empty_overrides_keeps_config() {
        let mut config = default_config();
        merge_cli_overrides(&mut config, &CliOverrides::default());
        assert_eq!(config.to_settings(), PaletteSettings::default());
    }
}

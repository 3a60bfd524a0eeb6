//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod chart;
mod names;
mod ramp;
mod recommend;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::color::{parse_color, Color, ColorSpace};
use crate::config::{load_config, merge_cli_overrides, CliOverrides, OutputFormat, TintrampConfig};
use crate::naming::TintsNamingMode;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Tintramp - Generate perceptual color ramps from a single seed color
#[derive(Parser)]
#[command(name = "tintramp")]
#[command(about = "Tintramp - Generate perceptual color ramps from a single seed color")]
#[command(version)]
pub struct Cli {
    /// Path to a tintramp.toml (default: discovered from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Palette settings flags shared by commands that build a ramp
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsArgs {
    /// Number of tints (3-256)
    #[arg(long, value_parser = clap::value_parser!(u16).range(3..=256))]
    pub length: Option<u16>,

    /// Interpolation color space (oklch, oklab, lch, lab, hsl, srgb)
    #[arg(long)]
    pub space: Option<ColorSpace>,

    /// Whiteness mix of the first tint (0-1)
    #[arg(long, value_parser = parse_fraction)]
    pub lightness_max: Option<f32>,

    /// Blackness mix of the last tint (0-1)
    #[arg(long, value_parser = parse_fraction)]
    pub lightness_min: Option<f32>,

    /// Tint naming mode ("50,100,200...900,950", "5,10,20...90,95", "0,10,20...", "0,100,200...", "manual")
    #[arg(long)]
    pub naming: Option<TintsNamingMode>,
}

impl SettingsArgs {
    /// Config overrides carried by these flags
    pub fn overrides(&self, format: Option<OutputFormat>) -> CliOverrides {
        CliOverrides {
            space: self.space,
            lightness_max: self.lightness_max,
            lightness_min: self.lightness_min,
            length: self.length.map(usize::from),
            naming: self.naming,
            format,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a ramp around a seed color
    Ramp {
        /// Seed color (hex, rgb(), hsl(), oklch() or a CSS color name)
        seed: String,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Pin a tint before generating, e.g. --anchor 3=#ff00ff (repeatable)
        #[arg(long = "anchor", value_name = "INDEX=COLOR")]
        anchors: Vec<String>,

        /// Palette name (default: hue name of the seed)
        #[arg(long)]
        name: Option<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List harmony-based companion colors for a seed color
    Recommend {
        /// Seed color
        seed: String,

        /// Color space hue rotations happen in
        #[arg(long)]
        space: Option<ColorSpace>,

        /// Output format (text or json)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the lightness, chroma and hue series of a ramp
    Chart {
        /// Seed color
        seed: String,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Output format (text or json)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print tint names for a ramp length and naming mode
    Names {
        /// Number of tints
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..=256))]
        length: Option<u16>,

        /// Tint naming mode
        #[arg(long)]
        naming: Option<TintsNamingMode>,
    },
}

/// Parse a `0..=1` fraction flag.
fn parse_fraction(s: &str) -> Result<f32, String> {
    let value: f32 = s.trim().parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is not between 0 and 1", value))
    }
}

/// Install a stderr logger; engine debug output only shows with `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();
    if let Err(e) = result {
        eprintln!("Warning: logging unavailable: {}", e);
    }
}

/// Load the config file and apply flag overrides on top.
pub(crate) fn resolve_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<TintrampConfig, ExitCode> {
    match load_config(path) {
        Ok(mut config) => {
            merge_cli_overrides(&mut config, overrides);
            Ok(config)
        }
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

/// Parse a seed color argument.
pub(crate) fn parse_seed(seed: &str) -> Result<Color, ExitCode> {
    parse_color(seed).map_err(|e| {
        eprintln!("Error: invalid color '{}': {}", seed, e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })
}

/// Print `value` as JSON.
pub(crate) fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> ExitCode {
    let json = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    match json {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Reject formats a command cannot produce.
pub(crate) fn unsupported_format(command: &str, format: OutputFormat) -> ExitCode {
    eprintln!("Error: '{}' does not support {:?} output (use text or json)", command, format);
    ExitCode::from(EXIT_INVALID_ARGS)
}

/// Entry point for the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Ramp { seed, settings, anchors, name, format } => {
            ramp::run_ramp(config, &seed, &settings, &anchors, name.as_deref(), format)
        }
        Commands::Recommend { seed, space, format } => {
            recommend::run_recommend(config, &seed, space, format)
        }
        Commands::Chart { seed, settings, format } => {
            chart::run_chart(config, &seed, &settings, format)
        }
        Commands::Names { length, naming } => names::run_names(config, length, naming),
    }
}

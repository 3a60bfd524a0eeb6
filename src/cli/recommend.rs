//! Recommend command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::color::ColorSpace;
use crate::config::{CliOverrides, OutputFormat};
use crate::recommend::recommend;

use super::{parse_seed, print_json, resolve_config, unsupported_format, EXIT_SUCCESS};

/// Execute the recommend command
pub fn run_recommend(
    config_path: Option<&Path>,
    seed: &str,
    space: Option<ColorSpace>,
    format: Option<OutputFormat>,
) -> ExitCode {
    let seed = match parse_seed(seed) {
        Ok(color) => color,
        Err(code) => return code,
    };
    let overrides = CliOverrides { space, format, ..Default::default() };
    let config = match resolve_config(config_path, &overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let sets = recommend(&seed, config.defaults.space);
    match config.output.format {
        OutputFormat::Json => print_json(&sets, config.output.pretty),
        OutputFormat::Text => {
            for set in &sets {
                println!("{}", set.harmony);
                for color in &set.colors {
                    println!("  {:<10} {}", color.name, color.color);
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        format @ (OutputFormat::Css | OutputFormat::Shades) => unsupported_format("recommend", format),
    }
}

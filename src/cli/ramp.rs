//! Ramp command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::color::{parse_color, Color};
use crate::config::OutputFormat;
use crate::edit::{rename, update_color};
use crate::export::{shades_to_json, to_stylesheet, ExportOptions};
use crate::models::PaletteBuild;
use crate::ramp::regenerate;

use super::{
    parse_seed, print_json, resolve_config, SettingsArgs, EXIT_ERROR, EXIT_INVALID_ARGS,
    EXIT_SUCCESS,
};

/// Execute the ramp command
pub fn run_ramp(
    config_path: Option<&Path>,
    seed: &str,
    settings: &SettingsArgs,
    anchors: &[String],
    name: Option<&str>,
    format: Option<OutputFormat>,
) -> ExitCode {
    let seed = match parse_seed(seed) {
        Ok(color) => color,
        Err(code) => return code,
    };
    let config = match resolve_config(config_path, &settings.overrides(format)) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let mut palette = PaletteBuild::from_seed(seed, config.to_settings());
    for anchor in anchors {
        let (index, color) = match parse_anchor(anchor) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("Error: invalid --anchor '{}': {}", anchor, e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        };
        if !palette.is_anchorable(index) {
            eprintln!(
                "Warning: tint {} cannot be anchored (boundary, center or out of range), skipped",
                index
            );
            continue;
        }
        palette = update_color(&palette, index, color, Some(true));
    }
    if !anchors.is_empty() {
        palette = regenerate(&palette);
    }
    if let Some(name) = name {
        palette = rename(&palette, name);
    }

    match config.output.format {
        OutputFormat::Json => print_json(&palette, config.output.pretty),
        OutputFormat::Css => {
            println!("{}", to_stylesheet(&palette));
            ExitCode::from(EXIT_SUCCESS)
        }
        OutputFormat::Shades => {
            let options = ExportOptions { pretty: config.output.pretty };
            match shades_to_json(&palette, &options) {
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
        OutputFormat::Text => {
            print_table(&palette);
            ExitCode::from(EXIT_SUCCESS)
        }
    }
}

/// Parse `INDEX=COLOR`.
fn parse_anchor(s: &str) -> Result<(usize, Color), String> {
    let (index, color) = s.split_once('=').ok_or("expected INDEX=COLOR")?;
    let index = index.trim().parse::<usize>().map_err(|e| format!("bad index: {}", e))?;
    let color = parse_color(color).map_err(|e| e.to_string())?;
    Ok((index, color))
}

fn print_table(palette: &PaletteBuild) {
    println!(
        "{} ({}, {} tints)",
        palette.name,
        palette.settings.interpolation_color_space,
        palette.tints.len()
    );
    let width = palette.tints.iter().map(|tint| tint.name.len()).max().unwrap_or(0);
    for tint in &palette.tints {
        let marker = if tint.is_center {
            "  center"
        } else if tint.is_anchor {
            "  anchor"
        } else {
            ""
        };
        println!("  {:<width$}  {}{}", tint.name, tint.color, marker, width = width);
    }
}

//! Chart command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::chart::{chart_series, AxisSide};
use crate::config::OutputFormat;
use crate::models::PaletteBuild;

use super::{parse_seed, print_json, resolve_config, unsupported_format, SettingsArgs, EXIT_SUCCESS};

/// Execute the chart command
pub fn run_chart(
    config_path: Option<&Path>,
    seed: &str,
    settings: &SettingsArgs,
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

    let palette = PaletteBuild::from_seed(seed, config.to_settings());
    let series = chart_series(&palette);
    match config.output.format {
        OutputFormat::Json => print_json(&series, config.output.pretty),
        OutputFormat::Text => {
            for axis in &series {
                println!("{}", axis.axis);
                print_side("left", &axis.left);
                print_side("right", &axis.right);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        format @ (OutputFormat::Css | OutputFormat::Shades) => unsupported_format("chart", format),
    }
}

fn print_side(label: &str, side: &AxisSide) {
    let target = side.target.map(|bound| format!(" -> {}", bound)).unwrap_or_default();
    let points: Vec<String> =
        side.points.iter().map(|point| format!("{}={:.3}", point.name, point.value)).collect();
    println!("  {}{}: {}", label, target, points.join(" "));
}

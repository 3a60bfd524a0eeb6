//! Names command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::naming::{tint_names, TintsNamingMode};

use super::{resolve_config, EXIT_SUCCESS};

/// Execute the names command
pub fn run_names(
    config_path: Option<&Path>,
    length: Option<u16>,
    naming: Option<TintsNamingMode>,
) -> ExitCode {
    let overrides = CliOverrides { naming, ..Default::default() };
    let config = match resolve_config(config_path, &overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };

    // Any length is listed, including ones below the ramp minimum
    let length = length.map(usize::from).unwrap_or(config.defaults.length);
    for name in tint_names(length, config.defaults.naming) {
        println!("{}", name);
    }
    ExitCode::from(EXIT_SUCCESS)
}

//! Tintramp - Command-line tool for generating perceptual color ramps

use std::process::ExitCode;

use tintramp::cli;

fn main() -> ExitCode {
    cli::run()
}

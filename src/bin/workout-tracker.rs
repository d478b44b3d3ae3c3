// ABOUTME: Workout tracker driver feeding sensor packages through the factory and formatter
// ABOUTME: Prints one report per valid package and skips rejected ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout tracker command-line driver.
//!
//! Usage:
//! ```bash
//! # Process the built-in sample packages
//! workout-tracker
//!
//! # Process explicit packages
//! workout-tracker RUN:15000,1,75 SWM:720,1,80,25,40
//!
//! # Emit JSON reports with debug logging
//! workout-tracker --format json -v
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use workout_tracker::{
    formatters::{format_report, OutputFormat},
    logging::LoggingConfig,
    models::SensorPackage,
    training::Training,
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    about = "Workout report generator",
    long_about = "Compute distance, mean speed, and spent calories from tracker packages and print a report for each."
)]
struct Args {
    /// Packages as CODE:readings, e.g. RUN:15000,1,75 (defaults to the sample packages)
    packages: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let format = args.format;
    let packages = if args.packages.is_empty() {
        SensorPackage::samples()
    } else {
        args.packages
            .iter()
            .filter_map(|raw| match raw.parse::<SensorPackage>() {
                Ok(package) => Some(package),
                Err(e) => {
                    warn!(package = %raw, error.code = ?e.code, "{e}");
                    None
                }
            })
            .collect()
    };

    let mut reported = 0_usize;
    for package in &packages {
        let Some(workout) = package.build() else {
            continue;
        };
        let output = format_report(&workout.show_training_info(), format)?;
        println!("{output}");
        reported += 1;
    }

    info!(
        packages = packages.len(),
        reported,
        format = %format,
        "Finished processing packages"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_text() {
        let args = Args::try_parse_from(["workout-tracker", "RUN:15000,1,75"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.packages, vec!["RUN:15000,1,75".to_owned()]);
    }

    #[test]
    fn test_format_accepts_json() {
        let args = Args::try_parse_from(["workout-tracker", "--format", "json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Args::try_parse_from(["workout-tracker", "--format", "xml"]);
        assert!(result.is_err());
    }
}

// ABOUTME: Output format abstraction for rendering training reports
// ABOUTME: Supports the fixed text template (default) and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Reports are printed with the fixed text template by default. JSON output
//! carries the unrounded values for downstream tooling.
//!
//! ```rust,no_run
//! use workout_tracker::formatters::{format_report, OutputFormat};
//! use workout_tracker::training::{read_package, Training};
//!
//! if let Some(workout) = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]) {
//!     let info = workout.show_training_info();
//!     if let Ok(output) = format_report(&info, OutputFormat::Json) {
//!         println!("{output}");
//!     }
//! }
//! ```

use std::fmt;

use clap::ValueEnum;

use crate::errors::{AppError, AppResult};
use crate::models::InfoMessage;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed text template (default)
    #[default]
    Text,
    /// JSON object with unrounded fields
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a training report in the requested format
///
/// # Errors
///
/// Returns a `SerializationError` if JSON serialization fails
pub fn format_report(info: &InfoMessage, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(info.message()),
        OutputFormat::Json => serde_json::to_string(info).map_err(|e| {
            AppError::serialization(format!("Format error ({format}): {e}"))
        }),
    }
}

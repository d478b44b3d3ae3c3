// ABOUTME: Raw sensor package pairing a workout code with its readings
// ABOUTME: Parses the CODE:v1,v2,... text form and holds the built-in sample packages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::training::{read_package, Workout};

/// One package of readings received from a tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout code, e.g. `RUN`
    pub code: String,
    /// Readings in constructor order
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a code and readings
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    /// Packages processed when the driver is given none
    #[must_use]
    pub fn samples() -> Vec<Self> {
        vec![
            Self::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            Self::new("RUN", vec![15000.0, 1.0, 75.0]),
            Self::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
            Self::new("BOX", vec![400.0, 1.0]),
            Self::new("WLK", vec![6000.0, 1.0, 60.0]),
        ]
    }

    /// Build the training this package describes, if it is valid
    #[must_use]
    pub fn build(&self) -> Option<Workout> {
        read_package(&self.code, &self.data)
    }
}

impl FromStr for SensorPackage {
    type Err = AppError;

    /// Parse `CODE:v1,v2,...`. An empty reading list (`CODE:`) is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, readings) = s
            .split_once(':')
            .ok_or_else(|| AppError::invalid_format(format!("Expected CODE:readings, got '{s}'")))?;

        if readings.trim().is_empty() {
            return Ok(Self::new(code.trim(), Vec::new()));
        }

        let data = readings
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(index, value)| {
                if value.is_empty() {
                    return Err(AppError::invalid_format(format!(
                        "Reading {} of '{s}' is empty",
                        index + 1
                    )));
                }
                value.parse::<f64>().map_err(|e| {
                    AppError::invalid_format(format!("Reading '{value}' is not a number: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(code.trim(), data))
    }
}

impl fmt::Display for SensorPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (index, value) in self.data.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_package() {
        let package: SensorPackage = "RUN:15000, 1, 75".parse().unwrap();
        assert_eq!(package, SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(package.to_string(), "RUN:15000,1,75");
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        let error = "RUN 15000".parse::<SensorPackage>().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);

        let error = "RUN:15000,fast,75".parse::<SensorPackage>().unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);

        for raw in ["SWM:720,1,80,,25,40", "WLK:9000,1,,75,180", "RUN:15000,1,75,", "RUN:,15000,1,75"] {
            let error = raw.parse::<SensorPackage>().unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidFormat, "{raw}");
        }
    }

    #[test]
    fn test_empty_reading_list_parses_to_no_readings() {
        let package: SensorPackage = "RUN:".parse().unwrap();
        assert!(package.data.is_empty());
        assert!(package.build().is_none());
    }

    #[test]
    fn test_samples_build_three_trainings() {
        let built = SensorPackage::samples()
            .iter()
            .filter_map(SensorPackage::build)
            .count();
        assert_eq!(built, 3);
    }
}

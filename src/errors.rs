// ABOUTME: Unified error type and error codes for workout package processing
// ABOUTME: Covers unknown workout codes, malformed sensor data, and output formatting failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation in the crate returns [`AppResult`]. The
//! [`ErrorCode`] classifies the failure, the message is the text shown to the
//! user when a package is rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message emitted when a package carries the wrong number or kind of readings
pub const INVALID_TRAINING_DATA_MESSAGE: &str = "Неверное представление данных о тренировке.";

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Workout code has no registered training variant
    UnknownWorkoutType,
    /// Sensor readings do not match the variant's parameters
    InvalidTrainingData,
    /// Input text could not be parsed
    InvalidFormat,
    /// Report serialization failed
    SerializationError,
    /// Environment configuration is unusable
    ConfigError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownWorkoutType => "The workout type code is not recognized",
            Self::InvalidTrainingData => "The sensor readings do not match the workout type",
            Self::InvalidFormat => "The input format is invalid",
            Self::SerializationError => "Report serialization failed",
            Self::ConfigError => "Configuration error encountered",
        }
    }
}

/// Unified error type for the crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Workout code is not one of the registered codes
    pub fn unknown_workout_type(code: &str) -> Self {
        Self::new(
            ErrorCode::UnknownWorkoutType,
            format!("Тип тренировки {code} не найден."),
        )
    }

    /// Readings have the wrong arity or a value of the wrong kind
    #[must_use]
    pub fn invalid_training_data() -> Self {
        Self::new(ErrorCode::InvalidTrainingData, INVALID_TRAINING_DATA_MESSAGE)
    }

    /// Unparseable input text
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_workout_type_message() {
        let error = AppError::unknown_workout_type("BOX");

        assert_eq!(error.code, ErrorCode::UnknownWorkoutType);
        assert_eq!(error.to_string(), "Тип тренировки BOX не найден.");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::InvalidTrainingData).unwrap();
        assert_eq!(json, "\"INVALID_TRAINING_DATA\"");
    }
}

// ABOUTME: Workout factory turning a package code and raw readings into a training
// ABOUTME: Validates code membership, arity, and integer readings before construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout factory
//!
//! Readings arrive as a flat list of numbers in constructor order:
//!
//! | Code | Readings |
//! |------|----------|
//! | `RUN` | action, duration, weight |
//! | `WLK` | action, duration, weight, height |
//! | `SWM` | action, duration, weight, length_pool, count_pool |

use tracing::{debug, warn};

use super::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutType;

/// Build a training from a package, emitting a warning when it is rejected
///
/// Returns `None` for unknown codes and malformed readings. The reason is
/// logged, never returned.
#[must_use]
pub fn read_package(code: &str, data: &[f64]) -> Option<Workout> {
    match try_read_package(code, data) {
        Ok(workout) => Some(workout),
        Err(error) => {
            warn!(
                workout.code = %code,
                workout.readings = data.len(),
                error.code = ?error.code,
                error.reason = error.code.description(),
                "{error}"
            );
            None
        }
    }
}

/// Build a training from a package
///
/// # Errors
///
/// - `UnknownWorkoutType` if `code` is not `RUN`, `WLK` or `SWM`
/// - `InvalidTrainingData` if the number of readings does not match the
///   workout type, or an integer reading is fractional, negative or not finite
pub fn try_read_package(code: &str, data: &[f64]) -> AppResult<Workout> {
    let workout_type: WorkoutType = code.parse()?;

    let workout: Workout = match (workout_type, data) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            Running::from_base(base(action, duration, weight)?).into()
        }
        (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::from_base(base(action, duration, weight)?, height).into()
        }
        (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            let count_pool = u32::try_from(whole_number(count_pool)?)
                .map_err(|_| AppError::invalid_training_data())?;
            Swimming::from_base(base(action, duration, weight)?, length_pool, count_pool).into()
        }
        _ => {
            debug!(
                expected = workout_type.arity(),
                got = data.len(),
                "Reading count mismatch for {workout_type}"
            );
            return Err(AppError::invalid_training_data());
        }
    };

    debug!(
        workout.code = %code,
        workout.action = workout.base().action(),
        "Built {} training",
        workout.workout_type()
    );
    Ok(workout)
}

fn base(action: f64, duration: f64, weight: f64) -> AppResult<TrainingBase> {
    Ok(TrainingBase::new(whole_number(action)?, duration, weight))
}

/// Convert a reading that must be a count into an integer
fn whole_number(value: f64) -> AppResult<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(AppError::invalid_training_data());
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_each_code_builds_its_variant() {
        let swimming = try_read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let running = try_read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let walking = try_read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        assert!(matches!(swimming, Workout::Swimming(_)));
        assert!(matches!(running, Workout::Running(_)));
        assert!(matches!(walking, Workout::SportsWalking(_)));
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let error = try_read_package("WLK", &[6000.0, 1.0, 60.0]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidTrainingData);

        let error = try_read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidTrainingData);
    }

    #[test]
    fn test_integer_readings_must_be_whole() {
        for action in [-1.0, 1.5, f64::NAN, f64::INFINITY] {
            let error = try_read_package("RUN", &[action, 1.0, 75.0]).unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidTrainingData);
        }

        let error = try_read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidTrainingData);

        let error = try_read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 5.0e10]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidTrainingData);
    }

    #[test]
    fn test_unknown_code_checked_before_arity() {
        let error = try_read_package("BOX", &[]).unwrap_err();
        assert_eq!(error.code, ErrorCode::UnknownWorkoutType);
    }
}

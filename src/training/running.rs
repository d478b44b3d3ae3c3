// ABOUTME: Running training variant
// ABOUTME: Calorie formula driven by mean speed, weight, and duration in minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Training, TrainingBase};
use crate::constants::training::running::{CALORIES_SPEED_MULTIPLIER, CALORIES_SPEED_SUBTRACTOR};
use crate::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use crate::models::WorkoutType;

/// Running training
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    /// Create a running training from raw readings
    #[must_use]
    pub const fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self::from_base(TrainingBase::new(action, duration, weight))
    }

    /// Create a running training from already-grouped readings
    #[must_use]
    pub const fn from_base(base: TrainingBase) -> Self {
        Self { base }
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    /// `(18 * speed - 20) * weight / 1000 * duration_minutes`
    fn spent_calories(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_SPEED_SUBTRACTOR)
            * self.base.weight()
            / METERS_PER_KM
            * self.base.duration()
            * MINUTES_PER_HOUR
    }
}

// ABOUTME: Pool swimming training variant
// ABOUTME: Speed comes from pool geometry rather than stroke count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Training, TrainingBase};
use crate::constants::training::swimming::{
    CALORIES_SPEED_ADDEND, CALORIES_WEIGHT_MULTIPLIER, STROKE_LENGTH_M,
};
use crate::constants::units::METERS_PER_KM;
use crate::models::WorkoutType;

/// Pool swimming training
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    /// Create a swimming training from raw readings
    ///
    /// # Arguments
    ///
    /// * `action` - Strokes performed
    /// * `duration` - Duration in hours
    /// * `weight` - Athlete weight in kilograms
    /// * `length_pool` - Pool length in meters
    /// * `count_pool` - Number of pool lengths swum
    #[must_use]
    pub const fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self::from_base(
            TrainingBase::new(action, duration, weight),
            length_pool,
            count_pool,
        )
    }

    /// Create a swimming training from already-grouped readings
    #[must_use]
    pub const fn from_base(base: TrainingBase, length_pool: f64, count_pool: u32) -> Self {
        Self {
            base,
            length_pool,
            count_pool,
        }
    }

    /// Pool length in meters
    #[must_use]
    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn step_length(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / METERS_PER_KM / self.base.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_SPEED_ADDEND) * CALORIES_WEIGHT_MULTIPLIER * self.base.weight()
    }
}

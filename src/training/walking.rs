// ABOUTME: Sports walking training variant
// ABOUTME: Calorie formula with a floor-divided speed-squared over height term
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Training, TrainingBase};
use crate::constants::training::walking::{
    CALORIES_FORCE_MULTIPLIER, CALORIES_WEIGHT_MULTIPLIER,
};
use crate::constants::units::MINUTES_PER_HOUR;
use crate::models::WorkoutType;

/// Sports walking training
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height: f64,
}

impl SportsWalking {
    /// Create a sports walking training from raw readings
    #[must_use]
    pub const fn new(action: u64, duration: f64, weight: f64, height: f64) -> Self {
        Self::from_base(TrainingBase::new(action, duration, weight), height)
    }

    /// Create a sports walking training from already-grouped readings
    #[must_use]
    pub const fn from_base(base: TrainingBase, height: f64) -> Self {
        Self { base, height }
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.base.weight();
        // Floor division, not true division. Reports depend on it.
        let speed_height_term = (self.mean_speed().powi(2) / self.height).floor();

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height_term * CALORIES_FORCE_MULTIPLIER * weight)
            * self.base.duration()
            * MINUTES_PER_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_sample_package() {
        let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0);

        assert!((walking.distance() - 5.85).abs() < 1e-9);
        assert!((walking.mean_speed() - 5.85).abs() < 1e-9);
        assert!((walking.spent_calories() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn test_speed_term_is_floored() {
        // ~30 km/h -> 900.006 / 180 = 5.00003, ~31 km/h -> 961.03 / 180 = 5.34, both floor to 5
        let just_over_five = SportsWalking::new(46_154, 1.0, 80.0, 180.0);
        let well_over_five = SportsWalking::new(47_693, 1.0, 80.0, 180.0);

        let expected = (0.035 * 80.0 + 5.0 * 0.029 * 80.0) * 60.0;
        assert!((just_over_five.mean_speed() - 30.0).abs() < 0.01);
        assert!((just_over_five.spent_calories() - expected).abs() < 1e-9);
        assert!((well_over_five.spent_calories() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_negative_height_floors_toward_negative_infinity() {
        // 34.2225 / -180 = -0.19, which floors to -1 rather than truncating to 0
        let walking = SportsWalking::new(9000, 1.0, 75.0, -180.0);

        let expected = (0.035 * 75.0 - 1.0 * 0.029 * 75.0) * 60.0;
        assert!((walking.spent_calories() - expected).abs() < 1e-9);
        assert!((walking.spent_calories() - 27.0).abs() < 1e-9);
    }
}

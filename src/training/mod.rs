// ABOUTME: Training abstraction shared by every workout variant
// ABOUTME: Provides distance, mean speed, and report assembly with per-variant calorie formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Module
//!
//! [`Training`] carries the shared formulas as provided methods. Each variant
//! supplies its own [`Training::spent_calories`]; a training without a
//! calorie formula does not compile.
//!
//! [`Workout`] is the closed set of variants returned by the factory. It
//! dispatches to the concrete variant with a `match`, so the overridden
//! methods of each variant are honored.
//!
//! ```rust,no_run
//! use workout_tracker::training::{read_package, Training};
//!
//! if let Some(workout) = read_package("RUN", &[15000.0, 1.0, 75.0]) {
//!     println!("{}", workout.show_training_info());
//! }
//! ```

/// Package code lookup and variant construction
pub mod factory;
/// Running variant
pub mod running;
/// Pool swimming variant
pub mod swimming;
/// Sports walking variant
pub mod walking;

pub use factory::{read_package, try_read_package};
pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::constants::training::STEP_LENGTH_M;
use crate::constants::units::METERS_PER_KM;
use crate::models::{InfoMessage, WorkoutType};

/// Readings common to every training
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    action: u64,
    duration: f64,
    weight: f64,
}

impl TrainingBase {
    /// Create the shared readings
    ///
    /// # Arguments
    ///
    /// * `action` - Steps or strokes performed
    /// * `duration` - Training duration in hours
    /// * `weight` - Athlete weight in kilograms
    #[must_use]
    pub const fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    /// Steps or strokes performed
    #[must_use]
    pub const fn action(&self) -> u64 {
        self.action
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

/// Metrics every training variant can compute
pub trait Training {
    /// Readings shared by all variants
    fn base(&self) -> &TrainingBase;

    /// Which variant this is
    fn workout_type(&self) -> WorkoutType;

    /// Energy spent during the training, in kcal
    fn spent_calories(&self) -> f64;

    /// Distance covered by one action, in meters
    fn step_length(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance covered, in kilometers
    fn distance(&self) -> f64 {
        self.base().action() as f64 * self.step_length() / METERS_PER_KM
    }

    /// Mean speed, in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration()
    }

    /// Assemble the report for this training
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.workout_type().display_name().to_owned(),
            duration: self.base().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// A training built from a sensor package
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    /// Running training
    Running(Running),
    /// Sports walking training
    SportsWalking(SportsWalking),
    /// Swimming training
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(training) => training,
            Self::SportsWalking(training) => training,
            Self::Swimming(training) => training,
        }
    }
}

impl Training for Workout {
    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn workout_type(&self) -> WorkoutType {
        self.as_training().workout_type()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }

    fn step_length(&self) -> f64 {
        self.as_training().step_length()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }
}

impl From<Running> for Workout {
    fn from(training: Running) -> Self {
        Self::Running(training)
    }
}

impl From<SportsWalking> for Workout {
    fn from(training: SportsWalking) -> Self {
        Self::SportsWalking(training)
    }
}

impl From<Swimming> for Workout {
    fn from(training: Swimming) -> Self {
        Self::Swimming(training)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_dispatch_keeps_variant_overrides() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        let workout = Workout::from(swimming.clone());

        assert_eq!(workout.workout_type(), WorkoutType::Swimming);
        assert!((workout.step_length() - 1.38).abs() < f64::EPSILON);
        assert!((workout.mean_speed() - swimming.mean_speed()).abs() < f64::EPSILON);
        assert_eq!(workout.show_training_info(), swimming.show_training_info());
    }
}

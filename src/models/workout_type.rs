// ABOUTME: Workout type enumeration for sensor packages
// ABOUTME: Maps 3-letter package codes to training variants with display names and arity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::workout_codes;
use crate::errors::AppError;

/// Enumeration of supported workout types
///
/// Each variant corresponds to exactly one training implementation and one
/// package code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    /// Running, code `RUN`
    Running,
    /// Sports walking, code `WLK`
    SportsWalking,
    /// Pool swimming, code `SWM`
    Swimming,
}

impl WorkoutType {
    /// All workout types in lookup order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Look up a workout type by its package code
    ///
    /// Codes are case-sensitive, matching what the sensors send.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            workout_codes::SWIMMING => Some(Self::Swimming),
            workout_codes::RUNNING => Some(Self::Running),
            workout_codes::SPORTS_WALKING => Some(Self::SportsWalking),
            _ => None,
        }
    }

    /// Package code for this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => workout_codes::RUNNING,
            Self::SportsWalking => workout_codes::SPORTS_WALKING,
            Self::Swimming => workout_codes::SWIMMING,
        }
    }

    /// Name shown in the training report
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of readings a package of this type must carry
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            // action, duration, weight
            Self::Running => 3,
            // + height
            Self::SportsWalking => 4,
            // + length_pool, count_pool
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| AppError::unknown_workout_type(s))
    }
}

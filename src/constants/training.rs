// ABOUTME: Empirically-derived coefficients for distance and calorie formulas
// ABOUTME: One submodule per training variant, values must not be altered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training coefficients
//!
//! These values are part of the calorie formulas' contract. Changing any of
//! them changes every report produced for that variant.

/// Distance covered by one step, in meters
pub const STEP_LENGTH_M: f64 = 0.65;

/// Running calorie formula coefficients
pub mod running {
    /// Multiplier applied to mean speed
    pub const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    /// Value subtracted after the speed multiplication
    pub const CALORIES_SPEED_SUBTRACTOR: f64 = 20.0;
}

/// Sports walking calorie formula coefficients
pub mod walking {
    /// Multiplier applied to body weight
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier applied to the speed/height term
    pub const CALORIES_FORCE_MULTIPLIER: f64 = 0.029;
}

/// Swimming distance and calorie formula coefficients
pub mod swimming {
    /// Distance covered by one stroke, in meters
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Value added to mean speed
    pub const CALORIES_SPEED_ADDEND: f64 = 1.1;
    /// Multiplier applied to the shifted speed
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}

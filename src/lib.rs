// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Computes distance, speed, and calories from sensor packages and renders reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Turns raw tracker packages into training reports for three workout
//! types: running (`RUN`), sports walking (`WLK`) and swimming (`SWM`).
//!
//! ## Architecture
//!
//! - **Training**: the `Training` trait and its three variants
//! - **Factory**: package code lookup and reading validation
//! - **Models**: `WorkoutType`, `SensorPackage`, `InfoMessage`
//! - **Formatters**: text and JSON report rendering
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_tracker::models::SensorPackage;
//! use workout_tracker::training::Training;
//!
//! for package in SensorPackage::samples() {
//!     if let Some(workout) = package.build() {
//!         println!("{}", workout.show_training_info().message());
//!     }
//! }
//! ```

/// Application constants organized by domain
pub mod constants;

/// Unified error handling with `AppError` and `ErrorCode`
pub mod errors;

/// Report output formats (text, JSON)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Workout types, sensor packages, and training reports
pub mod models;

/// Training abstraction, variants, and workout factory
pub mod training;

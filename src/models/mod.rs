// ABOUTME: Data models shared by the training calculations and report formatting
// ABOUTME: Re-exports WorkoutType, SensorPackage, and InfoMessage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Training report value object
pub mod info_message;
/// Raw sensor packages and their text form
pub mod sensor_package;
/// Workout type codes and display names
pub mod workout_type;

pub use info_message::InfoMessage;
pub use sensor_package::SensorPackage;
pub use workout_type::WorkoutType;

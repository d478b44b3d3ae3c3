// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups unit conversions, training coefficients, and service identity values

//! Constants module
//!
//! Constants are grouped into logical domains rather than being scattered
//! through the calculation code.

pub mod training;
pub mod units;

/// Service identity used in structured logs
pub mod service_names {
    /// Workout tracker service name
    pub const WORKOUT_TRACKER: &str = "workout_tracker";
}

/// Workout codes accepted from sensor packages
pub mod workout_codes {
    /// Running
    pub const RUNNING: &str = "RUN";
    /// Sports walking
    pub const SPORTS_WALKING: &str = "WLK";
    /// Swimming
    pub const SWIMMING: &str = "SWM";
}

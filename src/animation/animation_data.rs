//! Animation Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in animation_operations.rs

use crate::constants::animation::{AMPLITUDE, CLOCK_STEP};
use crate::constants::plane::JITTER_RANGE;
use serde::{Deserialize, Serialize};

/// Global animation clock for one running surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClockData {
    /// Clock value fed to the displacement. f64 so a long-running
    /// surface keeps advancing by a full step.
    pub frame: f64,

    /// Increment per rendered frame
    pub step: f64,

    /// Rendered frames since the last reset
    pub ticks: u64,
}

impl Default for AnimationClockData {
    fn default() -> Self {
        Self {
            frame: 0.0,
            step: CLOCK_STEP,
            ticks: 0,
        }
    }
}

/// Wobble and jitter parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Peak x/y displacement
    pub amplitude: f32,

    /// Clock increment per rendered frame
    pub clock_step: f64,

    /// Full width of the one-time generation jitter
    pub jitter_range: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            amplitude: AMPLITUDE,
            clock_step: CLOCK_STEP,
            jitter_range: JITTER_RANGE,
        }
    }
}

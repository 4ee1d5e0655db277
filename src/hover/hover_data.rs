//! Hover Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in hover_operations.rs

use crate::constants::hover::{BASE_COLOR, DURATION, HIGHLIGHT_COLOR};
use crate::mesh::Face;
use serde::{Deserialize, Serialize};

/// Monotonic easing curves, all mapping 0 to 0 and 1 to 1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Hermite smooth step, `t * t * (3 - 2t)`
    SmoothStep,
    /// Fast start, slow finish, `1 - (1 - t)^2`
    #[default]
    QuadOut,
}

/// Flash colors and timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub base_color: [f32; 3],
    pub highlight_color: [f32; 3],
    /// Seconds from highlight back to base
    pub duration: f32,
    pub easing: Easing,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            base_color: BASE_COLOR,
            highlight_color: HIGHLIGHT_COLOR,
            duration: DURATION,
            easing: Easing::default(),
        }
    }
}

/// Names one transition on one mesh generation. Stepping through a handle
/// that no longer matches the active transition writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionHandle {
    pub id: u64,
    pub mesh_generation: u64,
}

/// One in-flight color fade on a captured face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTransitionData {
    pub id: u64,

    /// Captured from the triggering hit, never re-resolved
    pub face: Face,

    pub mesh_generation: u64,
    pub start_color: [f32; 3],
    pub end_color: [f32; 3],
    pub current_color: [f32; 3],
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
}

/// Outcome of one interpolation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStatus {
    Running,
    Completed,
    /// Superseded or invalidated; nothing was written
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Transitioning,
}

/// Hover color controller state, at most one live transition
#[derive(Debug, Clone)]
pub struct HoverData {
    pub config: HoverConfig,
    pub active: Option<ColorTransitionData>,
    pub next_id: u64,
}

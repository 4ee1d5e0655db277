//! Frame Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in frame_operations.rs

use crate::animation::AnimationClockData;
use crate::camera::CameraData;
use crate::config::SurfaceConfig;
use crate::hover::{HoverData, TransitionHandle};
use crate::mesh::SurfaceMeshData;
use crate::picking::{Hit, PointerData};
use crate::viewport::ViewportData;
use rand::rngs::StdRng;

/// Everything the frame loop reads and writes, owned in one place
pub struct SurfaceState {
    pub config: SurfaceConfig,
    pub mesh: SurfaceMeshData,
    pub clock: AnimationClockData,
    pub pointer: PointerData,
    pub camera: CameraData,
    pub viewport: ViewportData,
    pub hover: HoverData,

    /// Source for jitter and phases on regeneration
    pub rng: StdRng,

    pub stats: FrameStats,
}

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// 1-based tick number
    pub frame: u64,

    /// Clock value the vertices were displaced with
    pub clock: f64,

    pub hit: Option<Hit>,

    /// Transition started by this tick's hit
    pub transition: Option<TransitionHandle>,
}

/// Running totals across ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,

    /// Ticks where a ray was projected
    pub rays_cast: u64,

    pub hits: u64,
    pub transitions_started: u64,

    /// Hits whose transition could not be written
    pub transition_errors: u64,

    pub regenerations: u64,
}

/// Scene host that owns the display loop and the renderer
pub trait FrameHost {
    /// Ask for another tick at the next display refresh
    fn request_next_frame(&mut self);

    /// Draw the current state
    fn render(&mut self, state: &SurfaceState);
}

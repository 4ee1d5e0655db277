//! Reference values for the wave surface
//!
//! Config defaults are built from these; tests use them as the expected
//! behaviour.

/// Plane geometry defaults
pub mod plane {
    pub const WIDTH: f32 = 400.0;
    pub const HEIGHT: f32 = 400.0;
    pub const WIDTH_SEGMENTS: u32 = 30;
    pub const HEIGHT_SEGMENTS: u32 = 30;

    /// Full width of the one-time jitter window; each axis moves by up to half of it
    pub const JITTER_RANGE: f32 = 3.0;
}

/// Vertex wobble
pub mod animation {
    /// Peak x/y offset from the original position
    pub const AMPLITUDE: f32 = 0.008;

    /// Clock increment per rendered frame
    pub const CLOCK_STEP: f64 = 0.01;
}

/// Hover flash colors and timing
pub mod hover {
    pub const BASE_COLOR: [f32; 3] = [0.1, 0.5, 0.8];

    /// Over-bright on purpose so the flash reads against the base color
    pub const HIGHLIGHT_COLOR: [f32; 3] = [1.5, 1.5, 1.5];

    /// Seconds from highlight back to base
    pub const DURATION: f32 = 1.0;
}

/// Default perspective camera
pub mod camera {
    pub const FOV_DEGREES: f32 = 75.0;
    pub const NEAR_PLANE: f32 = 0.1;
    pub const FAR_PLANE: f32 = 1000.0;
    pub const DISTANCE: f32 = 120.0;
}

/// Viewport fallback before the host reports a real size
pub mod viewport {
    pub const WIDTH: u32 = 1280;
    pub const HEIGHT: u32 = 720;
    pub const PIXEL_RATIO: f32 = 1.0;
}

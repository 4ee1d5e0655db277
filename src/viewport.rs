/// Viewport Data and Operations
///
/// Size of the host's drawing surface. Pure data plus free functions.
use crate::constants::viewport::{HEIGHT, PIXEL_RATIO, WIDTH};

/// Drawing surface size in device-independent pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportData {
    pub width: u32,
    pub height: u32,
    /// Device pixels per logical pixel
    pub pixel_ratio: f32,
}

impl Default for ViewportData {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            pixel_ratio: PIXEL_RATIO,
        }
    }
}

/// Create viewport data
pub fn create_viewport(width: u32, height: u32, pixel_ratio: f32) -> ViewportData {
    ViewportData {
        width,
        height,
        pixel_ratio,
    }
}

/// Width over height, 1.0 for a collapsed viewport
pub fn aspect_ratio(viewport: &ViewportData) -> f32 {
    if viewport.height == 0 {
        return 1.0;
    }
    viewport.width as f32 / viewport.height as f32
}

/// Size of the rendering surface in device pixels
pub fn framebuffer_size(viewport: &ViewportData) -> (u32, u32) {
    let ratio = if viewport.pixel_ratio > 0.0 {
        viewport.pixel_ratio
    } else {
        1.0
    };
    (
        (viewport.width as f32 * ratio).round() as u32,
        (viewport.height as f32 * ratio).round() as u32,
    )
}

/// Whether a screen-space point lies on the canvas
pub fn contains_screen_point(viewport: &ViewportData, x: f32, y: f32) -> bool {
    x >= 0.0 && y >= 0.0 && x <= viewport.width as f32 && y <= viewport.height as f32
}

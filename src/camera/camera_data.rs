//! Camera Data - Pure DOP
//!
//! NO METHODS. Just data.

use crate::constants::camera::{DISTANCE, FAR_PLANE, FOV_DEGREES, NEAR_PLANE};
use cgmath::Point3;
use serde::{Deserialize, Serialize};

/// Perspective camera owned by the scene host, read by the pointer projector.
///
/// Orientation is yaw around +Y then pitch; yaw -90° with zero pitch looks
/// down -Z at the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    pub position: Point3<f32>,
    pub yaw_radians: f32,
    pub pitch_radians: f32,

    /// Vertical field of view
    pub fov_radians: f32,

    /// Viewport width over height
    pub aspect_ratio: f32,

    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, DISTANCE),
            yaw_radians: -std::f32::consts::FRAC_PI_2,
            pitch_radians: 0.0,
            fov_radians: FOV_DEGREES.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near_plane: NEAR_PLANE,
            far_plane: FAR_PLANE,
        }
    }
}

/// `[camera]` config section, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, DISTANCE],
            yaw_degrees: -90.0,
            pitch_degrees: 0.0,
            fov_degrees: FOV_DEGREES,
            near_plane: NEAR_PLANE,
            far_plane: FAR_PLANE,
        }
    }
}

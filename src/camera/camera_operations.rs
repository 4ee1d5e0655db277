//! Camera Operations - Pure DOP Functions
//!
//! Basis vectors and matrices for the scene camera. Every function takes
//! camera data and returns a value; nothing is mutated in place.

use super::camera_data::{CameraConfig, CameraData};
use cgmath::{InnerSpace, Matrix4, PerspectiveFov, Point3, Rad, Vector3};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Camera described by `config`, sized for `aspect_ratio`
pub fn init_camera_from_config(config: &CameraConfig, aspect_ratio: f32) -> CameraData {
    CameraData {
        position: Point3::from(config.position),
        yaw_radians: config.yaw_degrees.to_radians(),
        pitch_radians: config.pitch_degrees.to_radians(),
        fov_radians: config.fov_degrees.to_radians(),
        aspect_ratio,
        near_plane: config.near_plane,
        far_plane: config.far_plane,
    }
}

// ============================================================================
// BASIS
// ============================================================================

/// Unit view direction for yaw around +Y and pitch above the horizon
pub fn calculate_forward_vector(yaw: f32, pitch: f32) -> Vector3<f32> {
    let (yaw_sin, yaw_cos) = yaw.sin_cos();
    let (pitch_sin, pitch_cos) = pitch.sin_cos();
    Vector3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize()
}

/// Horizontal unit vector to the right of the view direction
pub fn calculate_right_vector(yaw: f32) -> Vector3<f32> {
    let (yaw_sin, yaw_cos) = yaw.sin_cos();
    Vector3::new(-yaw_sin, 0.0, yaw_cos)
}

/// Screen-up in world space, tilted with the pitch
pub fn calculate_up_vector(yaw: f32, pitch: f32) -> Vector3<f32> {
    calculate_right_vector(yaw)
        .cross(calculate_forward_vector(yaw, pitch))
        .normalize()
}

// ============================================================================
// MATRICES
// ============================================================================

/// World to view space
pub fn build_view_matrix(camera: &CameraData) -> Matrix4<f32> {
    Matrix4::look_to_rh(
        camera.position,
        calculate_forward_vector(camera.yaw_radians, camera.pitch_radians),
        Vector3::unit_y(),
    )
}

/// View to clip space, OpenGL depth range
pub fn build_projection_matrix(camera: &CameraData) -> Matrix4<f32> {
    PerspectiveFov {
        fovy: Rad(camera.fov_radians),
        aspect: camera.aspect_ratio,
        near: camera.near_plane,
        far: camera.far_plane,
    }
    .into()
}

/// World to clip space, what the render host uploads
pub fn build_view_projection_matrix(camera: &CameraData) -> Matrix4<f32> {
    build_projection_matrix(camera) * build_view_matrix(camera)
}

// ============================================================================
// UPDATES
// ============================================================================

/// Same camera with the aspect of a `width` x `height` surface. A
/// zero-height surface keeps the old aspect.
pub fn update_aspect_ratio(camera: &CameraData, width: u32, height: u32) -> CameraData {
    if height == 0 {
        return *camera;
    }
    CameraData {
        aspect_ratio: width as f32 / height as f32,
        ..*camera
    }
}

pub fn log_camera_context(camera: &CameraData) {
    log::debug!(
        "[Camera] At ({:.1}, {:.1}, {:.1}), yaw {:.1}°, pitch {:.1}°, fov {:.1}°, aspect {:.3}",
        camera.position.x,
        camera.position.y,
        camera.position.z,
        camera.yaw_radians.to_degrees(),
        camera.pitch_radians.to_degrees(),
        camera.fov_radians.to_degrees(),
        camera.aspect_ratio
    );
}

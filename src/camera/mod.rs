/// Camera Module - DOP style
///
/// - camera_data.rs: camera state and its config section
/// - camera_operations.rs: basis vectors, matrices, resize

pub mod camera_data;
pub mod camera_operations;

pub use camera_data::{CameraConfig, CameraData};

pub use camera_operations::{
    // Setup
    init_camera_from_config,

    // Basis
    calculate_forward_vector,
    calculate_right_vector,
    calculate_up_vector,

    // Matrices
    build_projection_matrix,
    build_view_matrix,
    build_view_projection_matrix,

    // Resize and diagnostics
    log_camera_context,
    update_aspect_ratio,
};

/// Host resize hook
pub fn camera_resize(camera: &CameraData, width: u32, height: u32) -> CameraData {
    update_aspect_ratio(camera, width, height)
}

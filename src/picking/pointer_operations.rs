//! Pointer Operations - Pure DOP Functions
//!
//! Screen pixels to NDC, NDC to a world ray.

use super::pointer_data::PointerData;
use super::ray::Ray;
use crate::camera::{
    calculate_forward_vector, calculate_right_vector, calculate_up_vector, CameraData,
};
use crate::viewport::ViewportData;
use cgmath::{InnerSpace, Vector2};

/// Screen pixels (origin top-left, y down) to NDC (origin centre, y up)
pub fn screen_to_ndc(x: f32, y: f32, viewport: &ViewportData) -> Vector2<f32> {
    let width = viewport.width.max(1) as f32;
    let height = viewport.height.max(1) as f32;
    Vector2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

/// Record a pointer move reported in screen pixels
pub fn update_pointer_from_screen(
    pointer: &mut PointerData,
    x: f32,
    y: f32,
    viewport: &ViewportData,
) {
    pointer.ndc = Some(screen_to_ndc(x, y, viewport));
}

/// Record a pointer move already in NDC
pub fn update_pointer_ndc(pointer: &mut PointerData, ndc: Vector2<f32>) {
    pointer.ndc = Some(ndc);
}

/// Forget the pointer, e.g. when it leaves the window
pub fn clear_pointer(pointer: &mut PointerData) {
    pointer.ndc = None;
}

/// Whether an NDC point lies on the canvas
pub fn ndc_on_canvas(ndc: Vector2<f32>) -> bool {
    ndc.x.is_finite()
        && ndc.y.is_finite()
        && (-1.0..=1.0).contains(&ndc.x)
        && (-1.0..=1.0).contains(&ndc.y)
}

/// Ray from the camera through the pointer.
///
/// No ray when the pointer has never been seen, sits off-canvas, or the
/// camera is degenerate. The direction is built from the camera basis
/// rather than an inverted view-projection, which loses precision in f32.
pub fn project_pointer(pointer: &PointerData, camera: &CameraData) -> Option<Ray> {
    let ndc = pointer.ndc?;
    if !ndc_on_canvas(ndc) {
        return None;
    }

    let forward = calculate_forward_vector(camera.yaw_radians, camera.pitch_radians);
    let right = calculate_right_vector(camera.yaw_radians);
    let up = calculate_up_vector(camera.yaw_radians, camera.pitch_radians);

    let half_height = (camera.fov_radians * 0.5).tan();
    let half_width = half_height * camera.aspect_ratio;
    let direction = forward + right * (ndc.x * half_width) + up * (ndc.y * half_height);

    if !direction.magnitude2().is_finite() || direction.magnitude2() < f32::EPSILON {
        log::warn!("[Pointer] Degenerate camera, skipping projection");
        return None;
    }

    Some(Ray::new(camera.position, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::create_viewport;

    #[test]
    fn test_screen_to_ndc_flips_y() {
        let viewport = create_viewport(200, 100, 1.0);

        let center = screen_to_ndc(100.0, 50.0, &viewport);
        assert!(center.x.abs() < 1e-6 && center.y.abs() < 1e-6);

        let top_left = screen_to_ndc(0.0, 0.0, &viewport);
        assert_eq!(top_left, Vector2::new(-1.0, 1.0));

        let bottom_right = screen_to_ndc(200.0, 100.0, &viewport);
        assert_eq!(bottom_right, Vector2::new(1.0, -1.0));
    }

    #[test]
    fn test_missing_pointer_has_no_ray() {
        let pointer = PointerData::default();
        assert!(project_pointer(&pointer, &CameraData::default()).is_none());
    }

    #[test]
    fn test_off_canvas_pointer_has_no_ray() {
        let viewport = create_viewport(200, 100, 1.0);
        let mut pointer = PointerData::default();

        update_pointer_from_screen(&mut pointer, -20.0, 50.0, &viewport);
        assert!(project_pointer(&pointer, &CameraData::default()).is_none());

        update_pointer_from_screen(&mut pointer, 100.0, 180.0, &viewport);
        assert!(project_pointer(&pointer, &CameraData::default()).is_none());
    }

    #[test]
    fn test_center_pointer_ray_points_down_view_axis() {
        let mut pointer = PointerData::default();
        update_pointer_ndc(&mut pointer, Vector2::new(0.0, 0.0));

        let camera = CameraData::default();
        let ray = project_pointer(&pointer, &camera).expect("pointer is on canvas");
        assert_eq!(ray.origin, camera.position);
        assert!(ray.direction.x.abs() < 1e-4);
        assert!(ray.direction.y.abs() < 1e-4);
        assert!((ray.direction.z + 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_corner_ray_matches_frustum_edge() {
        let mut pointer = PointerData::default();
        update_pointer_ndc(&mut pointer, Vector2::new(1.0, 1.0));

        let camera = CameraData {
            aspect_ratio: 2.0,
            ..Default::default()
        };
        let ray = project_pointer(&pointer, &camera).expect("corner is on canvas");

        // Where the ray crosses the plane one unit in front of the camera
        let scale = -1.0 / ray.direction.z;
        let half_height = (camera.fov_radians / 2.0).tan();
        assert!((ray.direction.x * scale - half_height * 2.0).abs() < 1e-4);
        assert!((ray.direction.y * scale - half_height).abs() < 1e-4);
    }

    #[test]
    fn test_right_pointer_ray_leans_right() {
        let mut pointer = PointerData::default();
        update_pointer_ndc(&mut pointer, Vector2::new(0.5, -0.5));

        let ray = project_pointer(&pointer, &CameraData::default()).expect("on canvas");
        assert!(ray.direction.x > 0.0);
        assert!(ray.direction.y < 0.0);
        assert!(ray.direction.z < 0.0);
    }

    #[test]
    fn test_last_update_wins_and_clear() {
        let viewport = create_viewport(100, 100, 1.0);
        let mut pointer = PointerData::default();
        update_pointer_from_screen(&mut pointer, 10.0, 10.0, &viewport);
        update_pointer_from_screen(&mut pointer, 50.0, 50.0, &viewport);
        assert_eq!(pointer.ndc, Some(Vector2::new(0.0, 0.0)));

        clear_pointer(&mut pointer);
        assert!(pointer.ndc.is_none());
    }
}

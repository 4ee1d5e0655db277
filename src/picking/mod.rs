/// Picking Module - pointer projection and ray/mesh intersection
///
/// - pointer_data.rs / pointer_operations.rs: pointer state, screen to NDC, NDC to ray
/// - picking_data.rs / picking_operations.rs: nearest-face resolution
/// - ray.rs, aabb.rs: shared geometry

pub mod aabb;
pub mod picking_data;
pub mod picking_operations;
pub mod pointer_data;
pub mod pointer_operations;
pub mod ray;

pub use aabb::{aabb_expanded, aabb_from_points, create_aabb, ray_intersects_aabb, AABB};
pub use picking_data::Hit;
pub use picking_operations::{hit_normal, intersect_triangle, resolve_hit, resolve_optional_hit};
pub use pointer_data::PointerData;
pub use pointer_operations::{
    clear_pointer, ndc_on_canvas, project_pointer, screen_to_ndc, update_pointer_from_screen,
    update_pointer_ndc,
};
pub use ray::Ray;

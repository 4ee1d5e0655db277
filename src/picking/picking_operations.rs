//! Picking Operations - Pure DOP Functions
//!
//! Ray against the live (displaced) triangles of the surface.

use super::aabb::{aabb_expanded, aabb_from_points, ray_intersects_aabb};
use super::picking_data::Hit;
use super::ray::Ray;
use crate::mesh::{face_positions, SurfaceMeshData};
use cgmath::{InnerSpace, Vector3};

const EPSILON: f32 = 1e-7;

/// Möller–Trumbore, double-sided. Returns `(t, u, v)` where `u` weights the
/// second corner and `v` the third.
pub fn intersect_triangle(
    ray: &Ray,
    p0: [f32; 3],
    p1: [f32; 3],
    p2: [f32; 3],
) -> Option<(f32, f32, f32)> {
    let v0 = Vector3::from(p0);
    let edge1 = Vector3::from(p1) - v0;
    let edge2 = Vector3::from(p2) - v0;

    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < EPSILON {
        // Parallel to the triangle plane
        return None;
    }
    let inv_det = 1.0 / det;

    let origin = Vector3::new(ray.origin.x, ray.origin.y, ray.origin.z);
    let s = origin - v0;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(q) * inv_det;
    if t < 0.0 {
        return None;
    }

    Some((t, u, v))
}

/// Closest face hit by `ray` on the current positions of `mesh`.
///
/// Ties keep the lowest face index so results are stable frame to frame.
pub fn resolve_hit(ray: &Ray, mesh: &SurfaceMeshData) -> Option<Hit> {
    let bounds = aabb_from_points(&mesh.positions)?;
    // Flat grids have zero thickness; pad so the slab test never rejects on rounding
    if ray_intersects_aabb(ray, &aabb_expanded(&bounds, 1e-3)).is_none() {
        return None;
    }

    let mut best: Option<Hit> = None;

    for (face_index, face) in mesh.faces.iter().enumerate() {
        let Some([p0, p1, p2]) = face_positions(mesh, face) else {
            log::warn!("[Picking] Face {} references a missing vertex", face_index);
            continue;
        };

        let Some((t, u, v)) = intersect_triangle(ray, p0, p1, p2) else {
            continue;
        };

        if best.map_or(true, |hit| t < hit.distance) {
            best = Some(Hit {
                face: *face,
                face_index,
                distance: t,
                point: ray.at(t),
                barycentric: [1.0 - u - v, u, v],
            });
        }
    }

    best
}

/// Resolve against an optional ray; no ray means no hit-test this frame
pub fn resolve_optional_hit(ray: Option<&Ray>, mesh: &SurfaceMeshData) -> Option<Hit> {
    ray.and_then(|ray| resolve_hit(ray, mesh))
}

/// Unit normal of a hit face on the live positions
pub fn hit_normal(hit: &Hit, mesh: &SurfaceMeshData) -> Option<Vector3<f32>> {
    let [p0, p1, p2] = face_positions(mesh, &hit.face)?;
    let v0 = Vector3::from(p0);
    let normal = (Vector3::from(p1) - v0).cross(Vector3::from(p2) - v0);
    if normal.magnitude2() < EPSILON {
        return None;
    }
    Some(normal.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::displace_vertices;
    use crate::constants::hover::BASE_COLOR;
    use crate::mesh::{generate_seeded_mesh, GridConfig};
    use cgmath::Point3;

    fn flat_grid() -> SurfaceMeshData {
        let config = GridConfig {
            width: 4.0,
            height: 4.0,
            width_segments: 4,
            height_segments: 4,
        };
        generate_seeded_mesh(&config, 0.0, BASE_COLOR, 5)
    }

    fn down_at(x: f32, y: f32) -> Ray {
        Ray::new(Point3::new(x, y, 10.0), Vector3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_intersect_triangle_front_and_back() {
        let p0 = [0.0, 0.0, 0.0];
        let p1 = [1.0, 0.0, 0.0];
        let p2 = [0.0, 1.0, 0.0];

        let (t, u, v) = intersect_triangle(&down_at(0.25, 0.25), p0, p1, p2).expect("inside");
        assert!((t - 10.0).abs() < 1e-5);
        assert!((u - 0.25).abs() < 1e-5);
        assert!((v - 0.25).abs() < 1e-5);

        let from_below = Ray::new(Point3::new(0.25, 0.25, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let (t, _, _) = intersect_triangle(&from_below, p0, p1, p2).expect("double sided");
        assert!((t - 5.0).abs() < 1e-5);

        assert!(intersect_triangle(&down_at(0.8, 0.8), p0, p1, p2).is_none());
    }

    #[test]
    fn test_triangle_behind_ray_is_ignored() {
        let ray = Ray::new(Point3::new(0.25, 0.25, 10.0), Vector3::new(0.0, 0.0, 1.0));
        let triangle = ([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(intersect_triangle(&ray, triangle.0, triangle.1, triangle.2).is_none());
    }

    #[test]
    fn test_ray_through_known_face_resolves_to_that_face() {
        let mesh = flat_grid();

        // Cell (ix=1, iy=0) spans x in [-1, 0], y in [1, 2]. Its first
        // triangle is top-left, bottom-left, top-right.
        let hit = resolve_hit(&down_at(-0.8, 1.8), &mesh).expect("inside the grid");
        assert_eq!(hit.face_index, 2);
        assert_eq!(hit.face, mesh.faces[2]);
        assert!((hit.distance - 10.0).abs() < 1e-4);
        assert!((hit.point.x + 0.8).abs() < 1e-4);
        assert!((hit.barycentric.iter().sum::<f32>() - 1.0).abs() < 1e-5);

        // Same cell, lower-right half
        let hit = resolve_hit(&down_at(-0.2, 1.2), &mesh).expect("inside the grid");
        assert_eq!(hit.face_index, 3);
    }

    #[test]
    fn test_ray_missing_grid_returns_none() {
        let mesh = flat_grid();
        assert!(resolve_hit(&down_at(5.0, 0.0), &mesh).is_none());
        assert!(resolve_hit(&down_at(0.0, -2.5), &mesh).is_none());

        let parallel = Ray::new(Point3::new(-10.0, 0.5, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(resolve_hit(&parallel, &mesh).is_none());

        assert!(resolve_optional_hit(None, &mesh).is_none());
    }

    #[test]
    fn test_nearest_face_wins() {
        let mut mesh = flat_grid();
        // Copy of face 0 floating two units above the grid, appended last
        let face = mesh.faces[0];
        let mut lifted = face;
        let base = mesh.positions.len() as u32;
        for index in [face.a, face.b, face.c] {
            let mut p = mesh.positions[index as usize];
            p[2] = 2.0;
            mesh.positions.push(p);
            mesh.original_positions.push(p);
            mesh.phases.push(0.0);
            mesh.colors.push(BASE_COLOR);
        }
        lifted.a = base;
        lifted.b = base + 1;
        lifted.c = base + 2;
        mesh.faces.push(lifted);

        let hit = resolve_hit(&down_at(-1.8, 1.8), &mesh).expect("both layers are under the ray");
        assert_eq!(hit.face_index, mesh.faces.len() - 1);
        assert!((hit.distance - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_resolves_against_displaced_positions() {
        let mut mesh = flat_grid();
        displace_vertices(&mut mesh, 0.0, 0.0);
        let edge_ray = down_at(2.05, 0.0);
        assert!(resolve_hit(&edge_ray, &mesh).is_none());

        for phase in mesh.phases.iter_mut() {
            *phase = 0.0;
        }
        // cos(0) = 1: everything shifts +0.1 in x
        displace_vertices(&mut mesh, 0.0, 0.1);
        let hit = resolve_hit(&edge_ray, &mesh).expect("shifted grid now covers x = 2.05");
        assert!(hit.point.x > 2.0);
    }

    #[test]
    fn test_hit_normal_of_flat_grid_is_z() {
        let mesh = flat_grid();
        let hit = resolve_hit(&down_at(0.3, 0.3), &mesh).expect("inside");
        let normal = hit_normal(&hit, &mesh).expect("non-degenerate");
        assert!((normal.z.abs() - 1.0).abs() < 1e-5);
    }
}

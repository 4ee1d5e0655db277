/// Axis-Aligned Bounding Box for the live surface
///
/// Pure functions - used as the broad phase before per-face tests.
use super::ray::Ray;
use cgmath::Point3;

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy)]
pub struct AABB {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

/// Create new AABB from min/max points
pub fn create_aabb(min: Point3<f32>, max: Point3<f32>) -> AABB {
    AABB { min, max }
}

/// Smallest box holding every point, None for an empty slice
pub fn aabb_from_points(points: &[[f32; 3]]) -> Option<AABB> {
    let first = points.first()?;
    let mut min = Point3::from(*first);
    let mut max = min;

    for p in &points[1..] {
        min.x = min.x.min(p[0]);
        min.y = min.y.min(p[1]);
        min.z = min.z.min(p[2]);
        max.x = max.x.max(p[0]);
        max.y = max.y.max(p[1]);
        max.z = max.z.max(p[2]);
    }

    Some(AABB { min, max })
}

/// Grow the box by `margin` on every side
pub fn aabb_expanded(aabb: &AABB, margin: f32) -> AABB {
    AABB {
        min: Point3::new(aabb.min.x - margin, aabb.min.y - margin, aabb.min.z - margin),
        max: Point3::new(aabb.max.x + margin, aabb.max.y + margin, aabb.max.z + margin),
    }
}

/// Slab test. Returns the entry distance (0 when the origin is inside).
pub fn ray_intersects_aabb(ray: &Ray, aabb: &AABB) -> Option<f32> {
    let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
    let direction = [ray.direction.x, ray.direction.y, ray.direction.z];
    let box_min = [aabb.min.x, aabb.min.y, aabb.min.z];
    let box_max = [aabb.max.x, aabb.max.y, aabb.max.z];

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for i in 0..3 {
        if direction[i].abs() < 1e-8 {
            // Ray is parallel to this slab
            if origin[i] < box_min[i] || origin[i] > box_max[i] {
                return None;
            }
        } else {
            let inv = 1.0 / direction[i];
            let t1 = (box_min[i] - origin[i]) * inv;
            let t2 = (box_max[i] - origin[i]) * inv;

            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));

            if t_min > t_max {
                return None;
            }
        }
    }

    if t_max >= 0.0 {
        Some(t_min.max(0.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_aabb_from_points() {
        let aabb = aabb_from_points(&[[1.0, -2.0, 0.5], [-3.0, 4.0, 0.0], [0.0, 0.0, -1.0]])
            .expect("non-empty");
        assert_eq!(aabb.min, Point3::new(-3.0, -2.0, -1.0));
        assert_eq!(aabb.max, Point3::new(1.0, 4.0, 0.5));
        assert!(aabb_from_points(&[]).is_none());
    }

    #[test]
    fn test_ray_hits_flat_box_head_on() {
        let aabb = create_aabb(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, 1.0, 0.0));
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        let t = ray_intersects_aabb(&ray, &aabb).expect("straight down the middle");
        assert!((t - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_misses_box() {
        let aabb = create_aabb(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let beside = Ray::new(Point3::new(5.0, 0.0, 10.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(ray_intersects_aabb(&beside, &aabb).is_none());

        let away = Ray::new(Point3::new(0.0, 0.0, 10.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(ray_intersects_aabb(&away, &aabb).is_none());
    }

    #[test]
    fn test_expanded_box() {
        let aabb = create_aabb(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let grown = aabb_expanded(&aabb, 0.5);
        assert_eq!(grown.min, Point3::new(-0.5, -0.5, -0.5));
        assert_eq!(grown.max, Point3::new(1.5, 1.5, 1.5));
    }
}

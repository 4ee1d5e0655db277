use cgmath::{InnerSpace, Point3, Vector3};

/// World-space ray with a unit direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at parameter `t` along the ray
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

//! Picking Data - Pure DOP
//!
//! NO METHODS. Just data.

use crate::mesh::Face;
use cgmath::Point3;

/// Nearest face under a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Vertex indices of the hit triangle
    pub face: Face,

    /// Position of the face in the mesh face list
    pub face_index: usize,

    /// Ray parameter of the hit (world units along the unit direction)
    pub distance: f32,

    /// World-space hit point
    pub point: Point3<f32>,

    /// Weights of (a, b, c) at the hit point
    pub barycentric: [f32; 3],
}

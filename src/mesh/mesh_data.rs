//! Surface Mesh Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in mesh_operations.rs

use crate::constants::plane::{HEIGHT, HEIGHT_SEGMENTS, WIDTH, WIDTH_SEGMENTS};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

/// Plane dimensions and subdivision. Changing any field means regenerating the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            width_segments: WIDTH_SEGMENTS,
            height_segments: HEIGHT_SEGMENTS,
        }
    }
}

/// Triangle referencing three vertex indices
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

// Index buffer view relies on this layout
assert_eq_size!(Face, [u32; 3]);

/// Grid surface using Struct-of-Arrays, one entry per vertex in each array
#[derive(Debug, Clone)]
pub struct SurfaceMeshData {
    pub config: GridConfig,

    /// Live positions, rewritten every frame
    pub positions: Vec<[f32; 3]>,

    /// Jittered baseline, never written after generation
    pub original_positions: Vec<[f32; 3]>,

    /// Oscillation phase per vertex, in [0, 2π)
    pub phases: Vec<f32>,

    /// Per-vertex RGB
    pub colors: Vec<[f32; 3]>,

    pub faces: Vec<Face>,

    /// Bumped on every regeneration
    pub generation: u64,

    pub positions_dirty: bool,
    pub colors_dirty: bool,
}

/// Dirty flags handed to the render host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    pub positions: bool,
    pub colors: bool,
}

/// Memory statistics for a surface mesh
#[derive(Debug, Clone)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub face_count: usize,
    pub positions_size: usize,
    pub colors_size: usize,
    pub phases_size: usize,
    pub index_size: usize,
    pub total_size: usize,
}

impl std::fmt::Display for MeshStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SurfaceMesh: {} vertices, {} faces, {} bytes total (pos: {}x2, col: {}, phase: {}, idx: {})",
            self.vertex_count,
            self.face_count,
            self.total_size,
            self.positions_size,
            self.colors_size,
            self.phases_size,
            self.index_size
        )
    }
}

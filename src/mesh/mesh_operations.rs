//! Surface Mesh Operations - Pure DOP Functions
//!
//! All functions take data and transform it. No methods, no self.

use super::mesh_data::{DirtyFlags, Face, GridConfig, MeshStats, SurfaceMeshData};
use crate::error::{SurfaceError, SurfaceResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

// ============================================================================
// GENERATION
// ============================================================================

/// Number of vertices a grid config produces
pub fn grid_vertex_count(config: &GridConfig) -> usize {
    (config.width_segments as usize + 1) * (config.height_segments as usize + 1)
}

/// Number of triangles a grid config produces
pub fn grid_face_count(config: &GridConfig) -> usize {
    2 * config.width_segments as usize * config.height_segments as usize
}

/// Flat plane positions, row-major from the top edge, centred on the origin
pub fn build_grid_positions(config: &GridConfig) -> Vec<[f32; 3]> {
    let grid_x = config.width_segments;
    let grid_y = config.height_segments;
    let segment_width = config.width / grid_x as f32;
    let segment_height = config.height / grid_y as f32;
    let half_width = config.width / 2.0;
    let half_height = config.height / 2.0;

    let mut positions = Vec::with_capacity(grid_vertex_count(config));
    for iy in 0..=grid_y {
        let y = half_height - iy as f32 * segment_height;
        for ix in 0..=grid_x {
            let x = ix as f32 * segment_width - half_width;
            positions.push([x, y, 0.0]);
        }
    }
    positions
}

/// Two triangles per grid cell
pub fn build_grid_faces(config: &GridConfig) -> Vec<Face> {
    let grid_x = config.width_segments;
    let grid_y = config.height_segments;
    let row = grid_x + 1;

    let mut faces = Vec::with_capacity(grid_face_count(config));
    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = (ix + 1) + row * (iy + 1);
            let d = (ix + 1) + row * iy;

            faces.push(Face { a, b, c: d });
            faces.push(Face { a: b, b: c, c: d });
        }
    }
    faces
}

/// Generate a jittered grid surface.
///
/// Every axis of every vertex moves once by `(u - 0.5) * jitter_range`, the
/// result becomes the original snapshot, each vertex gets one phase in
/// [0, 2π) and every vertex is painted `base_color`.
pub fn generate_mesh<R: Rng>(
    config: &GridConfig,
    jitter_range: f32,
    base_color: [f32; 3],
    rng: &mut R,
) -> SurfaceMeshData {
    debug_assert!(config.width_segments > 0, "width_segments must be positive");
    debug_assert!(config.height_segments > 0, "height_segments must be positive");

    let mut positions = build_grid_positions(config);
    for position in positions.iter_mut() {
        for axis in position.iter_mut() {
            *axis += (rng.gen::<f32>() - 0.5) * jitter_range;
        }
    }

    let original_positions = positions.clone();
    let phases: Vec<f32> = (0..positions.len())
        .map(|_| rng.gen_range(0.0..TAU))
        .collect();
    let colors = vec![base_color; positions.len()];
    let faces = build_grid_faces(config);

    log::info!(
        "[Mesh] Generated {}x{} grid ({}x{} units): {} vertices, {} faces",
        config.width_segments,
        config.height_segments,
        config.width,
        config.height,
        positions.len(),
        faces.len()
    );

    SurfaceMeshData {
        config: *config,
        positions,
        original_positions,
        phases,
        colors,
        faces,
        generation: 0,
        positions_dirty: true,
        colors_dirty: true,
    }
}

/// Generate with a fixed seed; same config and seed give identical meshes
pub fn generate_seeded_mesh(
    config: &GridConfig,
    jitter_range: f32,
    base_color: [f32; 3],
    seed: u64,
) -> SurfaceMeshData {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_mesh(config, jitter_range, base_color, &mut rng)
}

/// Replace the mesh wholesale. The previous buffers are dropped here.
pub fn regenerate_mesh<R: Rng>(
    mesh: &mut SurfaceMeshData,
    config: &GridConfig,
    jitter_range: f32,
    base_color: [f32; 3],
    rng: &mut R,
) {
    let generation = mesh.generation + 1;
    log::info!(
        "[Mesh] Releasing generation {} ({} vertices)",
        mesh.generation,
        mesh.positions.len()
    );

    *mesh = generate_mesh(config, jitter_range, base_color, rng);
    mesh.generation = generation;
}

// ============================================================================
// QUERIES
// ============================================================================

/// Get the number of vertices
pub fn vertex_count(mesh: &SurfaceMeshData) -> usize {
    mesh.positions.len()
}

/// Get the number of faces
pub fn face_count(mesh: &SurfaceMeshData) -> usize {
    mesh.faces.len()
}

/// Live positions of a face's three corners
pub fn face_positions(mesh: &SurfaceMeshData, face: &Face) -> Option<[[f32; 3]; 3]> {
    Some([
        *mesh.positions.get(face.a as usize)?,
        *mesh.positions.get(face.b as usize)?,
        *mesh.positions.get(face.c as usize)?,
    ])
}

/// Whether all three indices address this mesh
pub fn face_in_bounds(mesh: &SurfaceMeshData, face: &Face) -> bool {
    let count = mesh.colors.len();
    (face.a as usize) < count && (face.b as usize) < count && (face.c as usize) < count
}

// ============================================================================
// RENDER VIEWS
// ============================================================================

/// Flattened xyz positions for the render host
pub fn position_buffer(mesh: &SurfaceMeshData) -> &[f32] {
    bytemuck::cast_slice(&mesh.positions)
}

/// Flattened rgb colors for the render host
pub fn color_buffer(mesh: &SurfaceMeshData) -> &[f32] {
    bytemuck::cast_slice(&mesh.colors)
}

/// Triangle list indices for the render host
pub fn index_buffer(mesh: &SurfaceMeshData) -> &[u32] {
    bytemuck::cast_slice(&mesh.faces)
}

// ============================================================================
// MUTATION
// ============================================================================

pub fn mark_positions_dirty(mesh: &mut SurfaceMeshData) {
    mesh.positions_dirty = true;
}

pub fn mark_colors_dirty(mesh: &mut SurfaceMeshData) {
    mesh.colors_dirty = true;
}

/// Return the dirty flags and clear them; the render host calls this once per upload
pub fn take_dirty_flags(mesh: &mut SurfaceMeshData) -> DirtyFlags {
    let flags = DirtyFlags {
        positions: mesh.positions_dirty,
        colors: mesh.colors_dirty,
    };
    mesh.positions_dirty = false;
    mesh.colors_dirty = false;
    flags
}

/// Write `color` to all three vertices of `face`, or to none of them
pub fn set_face_color(
    mesh: &mut SurfaceMeshData,
    face: &Face,
    color: [f32; 3],
) -> SurfaceResult<()> {
    let size = mesh.colors.len();
    for index in [face.a, face.b, face.c] {
        if index as usize >= size {
            return Err(SurfaceError::BufferAccess {
                index: index as usize,
                size,
            });
        }
    }

    mesh.colors[face.a as usize] = color;
    mesh.colors[face.b as usize] = color;
    mesh.colors[face.c as usize] = color;
    mark_colors_dirty(mesh);
    Ok(())
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Get memory statistics
pub fn mesh_stats(mesh: &SurfaceMeshData) -> MeshStats {
    let positions_size = std::mem::size_of_val(mesh.positions.as_slice());
    let colors_size = std::mem::size_of_val(mesh.colors.as_slice());
    let phases_size = std::mem::size_of_val(mesh.phases.as_slice());
    let index_size = std::mem::size_of_val(mesh.faces.as_slice());

    MeshStats {
        vertex_count: mesh.positions.len(),
        face_count: mesh.faces.len(),
        positions_size,
        colors_size,
        phases_size,
        index_size,
        total_size: positions_size * 2 + colors_size + phases_size + index_size,
    }
}

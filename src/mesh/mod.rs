/// Mesh Module - Data-Oriented Programming (DOP) style
///
/// - mesh_data.rs: grid config, face and the struct-of-arrays surface mesh
/// - mesh_operations.rs: generation, render views and color writes

pub mod mesh_data;
pub mod mesh_operations;

pub use mesh_data::{DirtyFlags, Face, GridConfig, MeshStats, SurfaceMeshData};

pub use mesh_operations::{
    // Generation
    build_grid_faces,
    build_grid_positions,
    generate_mesh,
    generate_seeded_mesh,
    grid_face_count,
    grid_vertex_count,
    regenerate_mesh,

    // Queries
    face_count,
    face_in_bounds,
    face_positions,
    vertex_count,

    // Render views
    color_buffer,
    index_buffer,
    position_buffer,

    // Mutation
    mark_colors_dirty,
    mark_positions_dirty,
    set_face_color,
    take_dirty_flags,

    // Diagnostics
    mesh_stats,
};

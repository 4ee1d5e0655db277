/// Frame Module - the per-frame driver
///
/// - frame_data.rs: surface state, frame report, host trait
/// - frame_operations.rs: tick, transition steps, regeneration, host events

pub mod frame_data;
pub mod frame_operations;

pub use frame_data::{FrameHost, FrameReport, FrameStats, SurfaceState};

pub use frame_operations::{
    // Initialization
    create_surface_state,
    load_surface_state,

    // Frame loop
    regenerate_surface,
    step_transitions,
    tick_frame,

    // Host events
    handle_pointer_leave,
    handle_pointer_move,
    handle_resize,
};

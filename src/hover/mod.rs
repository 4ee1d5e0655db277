/// Hover Module - the timed flash on the face under the pointer
///
/// - hover_data.rs: config, transition state, handles
/// - hover_operations.rs: easing, start/step/invalidate

pub mod hover_data;
pub mod hover_operations;

pub use hover_data::{
    ColorTransitionData, Easing, HoverConfig, HoverData, HoverPhase, TransitionHandle,
    TransitionStatus,
};

pub use hover_operations::{
    active_handle, advance_active_transition, create_hover, ease, hover_phase,
    invalidate_transition, is_handle_live, lerp_color, start_transition, step_transition,
};

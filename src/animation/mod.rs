/// Animation Module - the displacement engine and its clock
///
/// - animation_data.rs: clock and wobble parameters
/// - animation_operations.rs: clock stepping and per-vertex displacement

pub mod animation_data;
pub mod animation_operations;

pub use animation_data::{AnimationClockData, AnimationConfig};

pub use animation_operations::{
    advance_clock, create_clock, displace_vertices, displacement_at, reset_clock,
};

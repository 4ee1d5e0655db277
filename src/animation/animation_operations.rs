//! Animation Operations - Pure DOP Functions
//!
//! Displacement is a pure function of the clock and the original
//! positions; nothing here reads the previous frame's positions.

use super::animation_data::AnimationClockData;
use crate::mesh::{mark_positions_dirty, SurfaceMeshData};

// ============================================================================
// CLOCK
// ============================================================================

/// Create a clock at zero advancing by `step` per frame
pub fn create_clock(step: f64) -> AnimationClockData {
    AnimationClockData {
        frame: 0.0,
        step,
        ticks: 0,
    }
}

/// Advance by one rendered frame, returns the new clock value
pub fn advance_clock(clock: &mut AnimationClockData) -> f64 {
    clock.frame += clock.step;
    clock.ticks += 1;
    clock.frame
}

/// Restart the clock; the surface returns to its frame-zero pose on the next displacement
pub fn reset_clock(clock: &mut AnimationClockData) {
    clock.frame = 0.0;
    clock.ticks = 0;
}

// ============================================================================
// DISPLACEMENT
// ============================================================================

/// Displaced position of one vertex. Z passes through untouched.
///
/// The angle is formed in f64; only the unit offsets are narrowed.
pub fn displacement_at(original: [f32; 3], phase: f32, clock: f64, amplitude: f32) -> [f32; 3] {
    let (sin, cos) = (clock + f64::from(phase)).sin_cos();
    [
        original[0] + cos as f32 * amplitude,
        original[1] + sin as f32 * amplitude,
        original[2],
    ]
}

/// Recompute every live x/y from its original position and phase
pub fn displace_vertices(mesh: &mut SurfaceMeshData, clock: f64, amplitude: f32) {
    let SurfaceMeshData {
        positions,
        original_positions,
        phases,
        ..
    } = mesh;

    for ((position, original), phase) in positions
        .iter_mut()
        .zip(original_positions.iter())
        .zip(phases.iter())
    {
        let displaced = displacement_at(*original, *phase, clock, amplitude);
        position[0] = displaced[0];
        position[1] = displaced[1];
    }

    mark_positions_dirty(mesh);
    log::trace!(
        "[Animation] Displaced {} vertices at clock {:.3}",
        mesh.positions.len(),
        clock
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::animation::AMPLITUDE;
    use crate::constants::hover::BASE_COLOR;
    use crate::mesh::{generate_seeded_mesh, take_dirty_flags, GridConfig};

    fn test_mesh() -> SurfaceMeshData {
        let config = GridConfig {
            width: 20.0,
            height: 20.0,
            width_segments: 6,
            height_segments: 6,
        };
        generate_seeded_mesh(&config, 3.0, BASE_COLOR, 11)
    }

    fn assert_matches_formula(mesh: &SurfaceMeshData, clock: f64) {
        for i in 0..mesh.positions.len() {
            let original = mesh.original_positions[i];
            let angle = clock + f64::from(mesh.phases[i]);
            let live = mesh.positions[i];
            let expected_x = original[0] + angle.cos() as f32 * AMPLITUDE;
            let expected_y = original[1] + angle.sin() as f32 * AMPLITUDE;
            assert!((live[0] - expected_x).abs() < 1e-5, "x drifted at {}", i);
            assert!((live[1] - expected_y).abs() < 1e-5, "y drifted at {}", i);
            assert_eq!(live[2], original[2]);
        }
    }

    #[test]
    fn test_clock_advances_by_step() {
        let mut clock = create_clock(0.01);
        for _ in 0..3 {
            advance_clock(&mut clock);
        }
        assert!((clock.frame - 0.03).abs() < 1e-6);
        assert_eq!(clock.ticks, 3);

        reset_clock(&mut clock);
        assert_eq!(clock.frame, 0.0);
        assert_eq!(clock.ticks, 0);
        assert_eq!(clock.step, 0.01);
    }

    #[test]
    fn test_clock_keeps_advancing_after_long_runs() {
        // Past 2^18 an f32 clock would absorb a 0.01 step entirely
        let mut clock = create_clock(0.01);
        clock.frame = 262_144.0;

        let mut previous = clock.frame;
        for _ in 0..1000 {
            let next = advance_clock(&mut clock);
            assert!(next > previous, "clock stalled at {}", previous);
            previous = next;
        }
        assert!((clock.frame - 262_154.0).abs() < 1e-6);
        assert_eq!(clock.ticks, 1000);
    }

    #[test]
    fn test_displacement_stays_bounded_at_large_clock_values() {
        let original = [1.0, -2.0, 0.5];
        let a = displacement_at(original, 0.3, 262_144.0, AMPLITUDE);
        let b = displacement_at(original, 0.3, 262_144.01, AMPLITUDE);

        assert_ne!(a, b);
        for displaced in [a, b] {
            assert!((displaced[0] - original[0]).abs() <= AMPLITUDE + 1e-6);
            assert!((displaced[1] - original[1]).abs() <= AMPLITUDE + 1e-6);
            assert_eq!(displaced[2], original[2]);
        }
    }

    #[test]
    fn test_displacement_is_pure_function_of_clock() {
        let mut mesh = test_mesh();

        displace_vertices(&mut mesh, 1.25, AMPLITUDE);
        assert_matches_formula(&mesh, 1.25);

        // Many intermediate frames must not accumulate into the result
        for step in 0..500 {
            displace_vertices(&mut mesh, step as f64 * 0.37, AMPLITUDE);
        }
        displace_vertices(&mut mesh, 7.5, AMPLITUDE);
        assert_matches_formula(&mesh, 7.5);

        let snapshot = mesh.positions.clone();
        displace_vertices(&mut mesh, 3.0, AMPLITUDE);
        displace_vertices(&mut mesh, 7.5, AMPLITUDE);
        assert_eq!(mesh.positions, snapshot);
    }

    #[test]
    fn test_displacement_never_touches_originals_or_z() {
        let mut mesh = test_mesh();
        let originals = mesh.original_positions.clone();
        let phases = mesh.phases.clone();

        displace_vertices(&mut mesh, 2.0, AMPLITUDE);

        assert_eq!(mesh.original_positions, originals);
        assert_eq!(mesh.phases, phases);
        for (live, original) in mesh.positions.iter().zip(originals.iter()) {
            assert_eq!(live[2], original[2]);
            assert!((live[0] - original[0]).abs() <= AMPLITUDE + 1e-6);
            assert!((live[1] - original[1]).abs() <= AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn test_displacement_marks_positions_dirty() {
        let mut mesh = test_mesh();
        take_dirty_flags(&mut mesh);

        displace_vertices(&mut mesh, 0.5, AMPLITUDE);
        let flags = take_dirty_flags(&mut mesh);
        assert!(flags.positions);
        assert!(!flags.colors);
    }
}

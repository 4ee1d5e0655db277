//! Frame Operations - Pure DOP Functions
//!
//! One tick is one full pass in a fixed order:
//!
//! 1. request the next frame
//! 2. render
//! 3. advance the clock
//! 4. displace vertices
//! 5. project the pointer
//! 6. resolve the hit
//! 7. start or replace the transition
//!
//! Transition steps run on their own cadence through `step_transitions`.

use super::frame_data::{FrameHost, FrameReport, FrameStats, SurfaceState};
use crate::animation::{advance_clock, create_clock, displace_vertices};
use crate::camera::{camera_resize, init_camera_from_config, log_camera_context};
use crate::config::{load_config_file, validate_config, SurfaceConfig};
use crate::error::SurfaceResult;
use crate::hover::{
    advance_active_transition, create_hover, invalidate_transition, start_transition,
    TransitionHandle, TransitionStatus,
};
use crate::mesh::{generate_mesh, mesh_stats, regenerate_mesh, GridConfig};
use crate::picking::{
    clear_pointer, project_pointer, resolve_optional_hit, update_pointer_from_screen,
    PointerData,
};
use crate::viewport::{aspect_ratio, create_viewport, ViewportData};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Validate `config` and build a ready-to-tick surface for `viewport`
pub fn create_surface_state(
    config: SurfaceConfig,
    viewport: ViewportData,
) -> SurfaceResult<SurfaceState> {
    validate_config(&config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mesh = generate_mesh(
        &config.plane,
        config.animation.jitter_range,
        config.hover.base_color,
        &mut rng,
    );
    let camera = init_camera_from_config(&config.camera, aspect_ratio(&viewport));

    log::info!(
        "[Frame] Surface ready: {} ({}x{} viewport)",
        mesh_stats(&mesh),
        viewport.width,
        viewport.height
    );
    log_camera_context(&camera);

    Ok(SurfaceState {
        clock: create_clock(config.animation.clock_step),
        hover: create_hover(config.hover),
        pointer: PointerData::default(),
        mesh,
        camera,
        viewport,
        rng,
        stats: FrameStats::default(),
        config,
    })
}

/// Read a TOML config from `path` and build the surface from it
pub fn load_surface_state(
    path: impl AsRef<Path>,
    viewport: ViewportData,
) -> SurfaceResult<SurfaceState> {
    let config = load_config_file(path)?;
    create_surface_state(config, viewport)
}

// ============================================================================
// FRAME LOOP
// ============================================================================

/// Run one frame. Never fails; a hit that cannot be painted is logged
/// and counted.
pub fn tick_frame<H: FrameHost + ?Sized>(state: &mut SurfaceState, host: &mut H) -> FrameReport {
    host.request_next_frame();
    host.render(state);

    let clock = advance_clock(&mut state.clock);
    displace_vertices(&mut state.mesh, clock, state.config.animation.amplitude);

    let ray = project_pointer(&state.pointer, &state.camera);
    if ray.is_some() {
        state.stats.rays_cast += 1;
    }
    let hit = resolve_optional_hit(ray.as_ref(), &state.mesh);

    let mut transition = None;
    if let Some(hit) = &hit {
        state.stats.hits += 1;
        match start_transition(&mut state.hover, &mut state.mesh, hit.face) {
            Ok(handle) => {
                state.stats.transitions_started += 1;
                transition = Some(handle);
            }
            Err(e) => {
                state.stats.transition_errors += 1;
                log::warn!("[Frame] Hit on face {} not painted: {}", hit.face_index, e);
            }
        }
    }

    state.stats.frames += 1;
    log::trace!(
        "[Frame] #{} clock {:.2} hit {:?}",
        state.stats.frames,
        clock,
        hit.as_ref().map(|h| h.face_index)
    );

    FrameReport {
        frame: state.stats.frames,
        clock,
        hit,
        transition,
    }
}

/// Step the live hover transition by `dt` seconds. None when idle.
pub fn step_transitions(state: &mut SurfaceState, dt: f32) -> Option<TransitionStatus> {
    advance_active_transition(&mut state.hover, &mut state.mesh, dt)
}

/// Replace the mesh with a fresh one for `grid`.
///
/// The live transition is invalidated before the old buffers go away. The
/// clock keeps running. Returns the invalidated handle, if any.
pub fn regenerate_surface(
    state: &mut SurfaceState,
    grid: GridConfig,
) -> SurfaceResult<Option<TransitionHandle>> {
    let mut config = state.config.clone();
    config.plane = grid;
    validate_config(&config)?;

    let invalidated = invalidate_transition(&mut state.hover);
    regenerate_mesh(
        &mut state.mesh,
        &grid,
        config.animation.jitter_range,
        config.hover.base_color,
        &mut state.rng,
    );
    state.config = config;
    state.stats.regenerations += 1;

    Ok(invalidated)
}

// ============================================================================
// HOST EVENTS
// ============================================================================

/// Pointer moved to screen pixel `(x, y)`
pub fn handle_pointer_move(state: &mut SurfaceState, x: f32, y: f32) {
    update_pointer_from_screen(&mut state.pointer, x, y, &state.viewport);
}

/// Pointer left the canvas
pub fn handle_pointer_leave(state: &mut SurfaceState) {
    clear_pointer(&mut state.pointer);
}

/// Host surface changed size
pub fn handle_resize(state: &mut SurfaceState, width: u32, height: u32, pixel_ratio: f32) {
    state.viewport = create_viewport(width, height, pixel_ratio);
    state.camera = camera_resize(&state.camera, width, height);
    log::debug!("[Frame] Resized to {}x{}", width, height);
    log_camera_context(&state.camera);
}

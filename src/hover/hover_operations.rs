//! Hover Operations - Pure DOP Functions
//!
//! Last hit wins: starting a transition discards the previous one, and
//! steps carry a handle so a superseded driver never writes.

use super::hover_data::{
    ColorTransitionData, Easing, HoverConfig, HoverData, HoverPhase, TransitionHandle,
    TransitionStatus,
};
use crate::error::SurfaceResult;
use crate::mesh::{set_face_color, Face, SurfaceMeshData};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Create an idle controller
pub fn create_hover(config: HoverConfig) -> HoverData {
    HoverData {
        config,
        active: None,
        next_id: 1,
    }
}

// ============================================================================
// EASING
// ============================================================================

/// Eased progress for `t`, clamped to [0, 1]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::SmoothStep => t * t * (3.0 - 2.0 * t),
        Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
    }
}

/// Component-wise linear blend
pub fn lerp_color(from: [f32; 3], to: [f32; 3], amount: f32) -> [f32; 3] {
    [
        from[0] + (to[0] - from[0]) * amount,
        from[1] + (to[1] - from[1]) * amount,
        from[2] + (to[2] - from[2]) * amount,
    ]
}

// ============================================================================
// QUERIES
// ============================================================================

pub fn hover_phase(hover: &HoverData) -> HoverPhase {
    if hover.active.is_some() {
        HoverPhase::Transitioning
    } else {
        HoverPhase::Idle
    }
}

/// Handle of the live transition, if any
pub fn active_handle(hover: &HoverData) -> Option<TransitionHandle> {
    hover.active.as_ref().map(|t| TransitionHandle {
        id: t.id,
        mesh_generation: t.mesh_generation,
    })
}

/// Whether `handle` still names the live transition
pub fn is_handle_live(hover: &HoverData, handle: &TransitionHandle) -> bool {
    active_handle(hover).as_ref() == Some(handle)
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Flash `face` with the highlight color and start fading it to base.
///
/// Any in-flight transition is dropped first; its handle goes stale. A face
/// that does not address this mesh is rejected and the current transition
/// is left alone.
pub fn start_transition(
    hover: &mut HoverData,
    mesh: &mut SurfaceMeshData,
    face: Face,
) -> SurfaceResult<TransitionHandle> {
    let start_color = hover.config.highlight_color;
    set_face_color(mesh, &face, start_color)?;

    if let Some(previous) = hover.active.take() {
        log::debug!(
            "[Hover] Transition {} superseded at {:.2}/{:.2}s",
            previous.id,
            previous.elapsed,
            previous.duration
        );
    }

    let id = hover.next_id;
    hover.next_id += 1;

    hover.active = Some(ColorTransitionData {
        id,
        face,
        mesh_generation: mesh.generation,
        start_color,
        end_color: hover.config.base_color,
        current_color: start_color,
        duration: hover.config.duration,
        elapsed: 0.0,
        easing: hover.config.easing,
    });

    log::debug!(
        "[Hover] Transition {} started on face ({}, {}, {})",
        id,
        face.a,
        face.b,
        face.c
    );

    Ok(TransitionHandle {
        id,
        mesh_generation: mesh.generation,
    })
}

/// One interpolation step of `dt` seconds for the transition named by `handle`.
///
/// Writes the eased color to all three captured vertices and marks colors
/// dirty. Stale handles, and transitions whose mesh has been regenerated,
/// return `Stale` without writing.
pub fn step_transition(
    hover: &mut HoverData,
    mesh: &mut SurfaceMeshData,
    handle: &TransitionHandle,
    dt: f32,
) -> TransitionStatus {
    let Some(transition) = hover.active.as_mut() else {
        return TransitionStatus::Stale;
    };
    if transition.id != handle.id || transition.mesh_generation != handle.mesh_generation {
        return TransitionStatus::Stale;
    }
    if transition.mesh_generation != mesh.generation {
        log::debug!(
            "[Hover] Transition {} dropped, mesh regenerated",
            transition.id
        );
        hover.active = None;
        return TransitionStatus::Stale;
    }

    transition.elapsed += dt.max(0.0);
    let progress = if transition.duration > 0.0 {
        (transition.elapsed / transition.duration).min(1.0)
    } else {
        1.0
    };
    let completed = progress >= 1.0;

    transition.current_color = if completed {
        transition.end_color
    } else {
        lerp_color(
            transition.start_color,
            transition.end_color,
            ease(transition.easing, progress),
        )
    };

    let face = transition.face;
    let color = transition.current_color;
    let id = transition.id;

    if let Err(e) = set_face_color(mesh, &face, color) {
        log::warn!("[Hover] Transition {} dropped: {}", id, e);
        hover.active = None;
        return TransitionStatus::Stale;
    }

    if completed {
        log::debug!("[Hover] Transition {} completed", id);
        hover.active = None;
        TransitionStatus::Completed
    } else {
        TransitionStatus::Running
    }
}

/// Step whatever transition is live. None when idle.
pub fn advance_active_transition(
    hover: &mut HoverData,
    mesh: &mut SurfaceMeshData,
    dt: f32,
) -> Option<TransitionStatus> {
    let handle = active_handle(hover)?;
    Some(step_transition(hover, mesh, &handle, dt))
}

/// Drop the live transition without writing; returns its handle
pub fn invalidate_transition(hover: &mut HoverData) -> Option<TransitionHandle> {
    let handle = active_handle(hover);
    if let Some(handle) = &handle {
        log::debug!("[Hover] Transition {} invalidated", handle.id);
    }
    hover.active = None;
    handle
}

//! Drive the wave surface without a window
//!
//! Sweeps a pointer across the canvas for 240 frames, steps the hover
//! flash at a fixed 60 Hz and logs every hit. Pass a TOML file to
//! override the defaults:
//!
//! ```text
//! RUST_LOG=debug cargo run --example headless_hover -- surface.toml
//! ```

use anyhow::Context;
use wave_surface::{
    camera::build_view_projection_matrix,
    config::SurfaceConfig,
    frame::{
        create_surface_state, handle_pointer_move, load_surface_state, step_transitions,
        tick_frame, FrameHost, SurfaceState,
    },
    mesh::{color_buffer, index_buffer, position_buffer},
    picking::hit_normal,
    viewport::{contains_screen_point, create_viewport, framebuffer_size},
};

const FRAMES: u64 = 240;
const STEP_SECONDS: f32 = 1.0 / 60.0;

/// Counts frames and pretends to upload buffers
struct HeadlessHost {
    scheduled: u64,
    floats_uploaded: usize,
}

impl FrameHost for HeadlessHost {
    fn request_next_frame(&mut self) {
        self.scheduled += 1;
    }

    fn render(&mut self, state: &SurfaceState) {
        let view_projection = build_view_projection_matrix(&state.camera);
        let positions = position_buffer(&state.mesh);
        let colors = color_buffer(&state.mesh);
        let indices = index_buffer(&state.mesh);
        self.floats_uploaded += positions.len() + colors.len();

        log::trace!(
            "[Demo] Render {} floats, {} indices, clip w of origin {:.2}",
            positions.len() + colors.len(),
            indices.len(),
            view_projection.w.w
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let viewport = create_viewport(1280, 720, 2.0);
    let (fb_width, fb_height) = framebuffer_size(&viewport);
    println!("Surface framebuffer: {}x{}", fb_width, fb_height);

    let mut state = match std::env::args().nth(1) {
        Some(path) => load_surface_state(&path, viewport)
            .with_context(|| format!("building the wave surface from {}", path))?,
        None => create_surface_state(SurfaceConfig::default(), viewport)
            .context("building the wave surface")?,
    };
    let mut host = HeadlessHost {
        scheduled: 0,
        floats_uploaded: 0,
    };

    for frame in 0..FRAMES {
        // Left to right along the middle row, then a little off the right edge
        let x = frame as f32 / FRAMES as f32 * viewport.width as f32 * 1.1;
        let y = viewport.height as f32 * 0.5;
        if !contains_screen_point(&viewport, x, y) {
            log::debug!("[Demo] Pointer off canvas at x = {:.0}", x);
        }
        handle_pointer_move(&mut state, x, y);

        let report = tick_frame(&mut state, &mut host);
        if let Some(hit) = report.hit {
            let facing = hit_normal(&hit, &state.mesh).map_or(0.0, |normal| normal.z);
            log::info!(
                "[Demo] Frame {} hit face {} at ({:.1}, {:.1}), normal z {:.2}",
                report.frame,
                hit.face_index,
                hit.point.x,
                hit.point.y,
                facing
            );
        }

        step_transitions(&mut state, STEP_SECONDS);
    }

    println!(
        "{} frames ({} scheduled), {} hits, {} flashes, {} floats uploaded",
        state.stats.frames,
        host.scheduled,
        state.stats.hits,
        state.stats.transitions_started,
        host.floats_uploaded
    );

    Ok(())
}

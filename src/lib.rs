// Wave Surface - Data-Oriented Programming (DOP) Architecture
//
// An animated grid surface: jittered vertices wobble around their
// original positions, and the face under the pointer flashes and fades
// back to the base color.
//
// - *_data modules hold plain data, no methods
// - *_operations modules hold the functions that transform it
// - frame::tick_frame runs one full frame in a fixed order

// Constants module
pub mod constants;

// Core modules
pub mod config;
pub mod error;
pub mod viewport;

// Surface systems
pub mod animation;
pub mod camera;
pub mod hover;
pub mod mesh;
pub mod picking;

// Frame driver
pub mod frame;

// Export commonly used types
pub use config::{load_config_file, load_config_str, validate_config, ConfigError, SurfaceConfig};
pub use error::{SurfaceError, SurfaceResult};
pub use frame::{
    create_surface_state, regenerate_surface, step_transitions, tick_frame, FrameHost,
    FrameReport, FrameStats, SurfaceState,
};
pub use hover::{Easing, TransitionHandle, TransitionStatus};
pub use mesh::{Face, GridConfig, SurfaceMeshData};
pub use picking::{Hit, PointerData, Ray};
pub use viewport::ViewportData;

// Re-export cgmath types for convenience
pub use cgmath::{Point3, Vector2, Vector3};

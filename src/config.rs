//! Surface configuration
//!
//! Every section defaults to the reference values, so a TOML file only
//! needs the keys it changes:
//!
//! ```toml
//! seed = 7
//!
//! [plane]
//! width_segments = 60
//!
//! [hover]
//! duration = 0.5
//! easing = "smooth_step"
//! ```

use crate::animation::AnimationConfig;
use crate::camera::CameraConfig;
use crate::hover::HoverConfig;
use crate::mesh::GridConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest segment count per axis accepted from config
pub const MAX_SEGMENTS: u32 = 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {field} = {value} ({reason})")]
    Invalid {
        field: String,
        value: String,
        reason: String,
    },
}

/// Complete surface configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub plane: GridConfig,
    pub animation: AnimationConfig,
    pub hover: HoverConfig,
    pub camera: CameraConfig,
    /// Fixed RNG seed for reproducible jitter and phases
    pub seed: Option<u64>,
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_positive(field: &str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, value, "must be a positive finite number"));
    }
    Ok(())
}

fn require_finite_color(field: &str, color: [f32; 3]) -> Result<(), ConfigError> {
    if color.iter().any(|c| !c.is_finite() || *c < 0.0) {
        return Err(invalid(
            field,
            format!("{:?}", color),
            "channels must be finite and non-negative",
        ));
    }
    Ok(())
}

/// Check ranges the frame loop relies on
pub fn validate_config(config: &SurfaceConfig) -> Result<(), ConfigError> {
    let plane = &config.plane;
    require_positive("plane.width", plane.width)?;
    require_positive("plane.height", plane.height)?;
    for (field, segments) in [
        ("plane.width_segments", plane.width_segments),
        ("plane.height_segments", plane.height_segments),
    ] {
        if segments == 0 {
            return Err(invalid(field, segments, "must be at least 1"));
        }
        if segments > MAX_SEGMENTS {
            return Err(invalid(field, segments, "exceeds maximum of 1024"));
        }
    }

    let animation = &config.animation;
    if !animation.amplitude.is_finite() || animation.amplitude < 0.0 {
        return Err(invalid(
            "animation.amplitude",
            animation.amplitude,
            "must be finite and non-negative",
        ));
    }
    if !animation.clock_step.is_finite() || animation.clock_step <= 0.0 {
        return Err(invalid(
            "animation.clock_step",
            animation.clock_step,
            "must be a positive finite number",
        ));
    }
    if !animation.jitter_range.is_finite() || animation.jitter_range < 0.0 {
        return Err(invalid(
            "animation.jitter_range",
            animation.jitter_range,
            "must be finite and non-negative",
        ));
    }

    require_positive("hover.duration", config.hover.duration)?;
    require_finite_color("hover.base_color", config.hover.base_color)?;
    require_finite_color("hover.highlight_color", config.hover.highlight_color)?;

    let camera = &config.camera;
    if camera.fov_degrees <= 0.0 || camera.fov_degrees >= 180.0 {
        return Err(invalid(
            "camera.fov_degrees",
            camera.fov_degrees,
            "must be between 0 and 180",
        ));
    }
    require_positive("camera.near_plane", camera.near_plane)?;
    if !camera.far_plane.is_finite() || camera.far_plane <= camera.near_plane {
        return Err(invalid(
            "camera.far_plane",
            camera.far_plane,
            "must be beyond the near plane",
        ));
    }

    log::info!(
        "[Config] Validated: {}x{} segments, amplitude {}, flash {}s",
        plane.width_segments,
        plane.height_segments,
        animation.amplitude,
        config.hover.duration
    );
    Ok(())
}

/// Parse and validate TOML text
pub fn load_config_str(text: &str) -> Result<SurfaceConfig, ConfigError> {
    let config: SurfaceConfig = toml::from_str(text)?;
    validate_config(&config)?;
    Ok(config)
}

/// Read, parse and validate a TOML file
pub fn load_config_file(path: impl AsRef<Path>) -> Result<SurfaceConfig, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("[Config] Loaded {}", path.display());
    load_config_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;
    use crate::hover::Easing;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_reference_values() {
        let config = load_config_str("").expect("defaults are valid");
        assert_eq!(config, SurfaceConfig::default());
        assert_eq!(config.plane.width_segments, 30);
        assert_eq!(config.animation.amplitude, constants::animation::AMPLITUDE);
        assert_eq!(config.hover.base_color, [0.1, 0.5, 0.8]);
        assert_eq!(config.hover.easing, Easing::QuadOut);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = load_config_str(
            r#"
            seed = 7

            [plane]
            width_segments = 60

            [hover]
            duration = 0.5
            easing = "smooth_step"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.plane.width_segments, 60);
        assert_eq!(config.plane.height_segments, 30);
        assert_eq!(config.hover.duration, 0.5);
        assert_eq!(config.hover.easing, Easing::SmoothStep);
        assert_eq!(config.hover.highlight_color, [1.5, 1.5, 1.5]);
    }

    #[test]
    fn test_rejects_zero_segments() {
        let err = load_config_str("[plane]\nheight_segments = 0\n").unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "plane.height_segments"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_rejects_bad_camera_planes() {
        let mut config = SurfaceConfig::default();
        config.camera.far_plane = config.camera.near_plane;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            load_config_str("[plane\nwidth = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[animation]\namplitude = 0.02").expect("write config");

        let config = load_config_file(file.path()).expect("valid file");
        assert_eq!(config.animation.amplitude, 0.02);

        let missing = load_config_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));
    }
}

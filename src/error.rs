//! Error handling for the wave surface core
//!
//! The frame loop itself never fails; these errors surface from config
//! loading and from buffer writes that the loop logs and swallows.

use std::error::Error as StdError;
use std::fmt;

/// Main error type for the surface core
#[derive(Debug)]
pub enum SurfaceError {
    // Buffer Errors
    BufferAccess {
        index: usize,
        size: usize,
    },

    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // System Errors
    IoError {
        path: String,
        error: String,
    },
    ParseError {
        value: String,
        expected_type: String,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::BufferAccess { index, size } => write!(
                f,
                "Buffer access out of bounds: index {} >= size {}",
                index, size
            ),
            SurfaceError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),
            SurfaceError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),
            SurfaceError::ParseError {
                value,
                expected_type,
            } => write!(
                f,
                "Parse error: '{}' is not a valid {}",
                value, expected_type
            ),
        }
    }
}

impl StdError for SurfaceError {}

/// Type alias for Results in the surface core
pub type SurfaceResult<T> = Result<T, SurfaceError>;

impl From<crate::config::ConfigError> for SurfaceError {
    fn from(err: crate::config::ConfigError) -> Self {
        use crate::config::ConfigError;
        match err {
            ConfigError::Read { path, source } => SurfaceError::IoError {
                path,
                error: source.to_string(),
            },
            ConfigError::Parse(e) => SurfaceError::ParseError {
                value: e.message().to_string(),
                expected_type: "SurfaceConfig".to_string(),
            },
            ConfigError::Invalid {
                field,
                value,
                reason,
            } => SurfaceError::InvalidConfig {
                field,
                value,
                reason,
            },
        }
    }
}

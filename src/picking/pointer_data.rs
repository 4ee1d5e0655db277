//! Pointer Data - Pure DOP
//!
//! NO METHODS. Just data.

use cgmath::Vector2;

/// Most recent pointer position in normalized device coordinates.
///
/// `None` until the host reports the first pointer move. Later moves
/// overwrite earlier ones; only the last before a frame is read.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerData {
    pub ndc: Option<Vector2<f32>>,
}

//! Draw commands handed to the backend

use glam::IVec2;

use super::backend::{Mirror, TextureHandle};
use crate::app::geometry::Rect;

/// A rotated, mirrored textured blit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blit {
    pub texture: TextureHandle,
    /// Region of the texture, in texture pixels
    pub source: Rect,
    /// Region of the render target, in target pixels
    pub dest: Rect,
    /// Clockwise rotation in degrees
    pub rotation: f32,
    /// Rotation center relative to `dest`'s origin
    pub pivot: IVec2,
    pub mirror: Mirror,
}

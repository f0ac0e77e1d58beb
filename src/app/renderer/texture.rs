//! Texture, nine-slice texture and font handles
//!
//! These are plain handles: whoever loaded them owns the backend resource.

use glam::Vec2;

use super::backend::{FontHandle, TextureHandle};
use crate::error::{EngineError, Result};

/// A loaded texture and its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture {
    pub handle: TextureHandle,
    pub width: i32,
    pub height: i32,
}

impl Texture {
    pub fn new(handle: TextureHandle, width: i32, height: i32) -> Self {
        Self {
            handle,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// A texture partitioned into a 3x3 grid for non-uniform resizing
///
/// Offsets are absolute pixel coordinates: columns `[0, left)` and
/// `[right, width)` and rows `[0, top)` and `[bottom, height)` keep their
/// size, everything between them stretches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizableTexture {
    texture: Texture,
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl ResizableTexture {
    /// Build from offsets measured inward from each edge
    ///
    /// `right` and `bottom` count from the far edge, so `right = 0` puts the
    /// right partition on the last pixel column.
    pub fn from_edges(texture: Texture, left: i32, right: i32, top: i32, bottom: i32) -> Result<Self> {
        let right = texture.width - right - 1;
        let bottom = texture.height - bottom - 1;
        Self::from_absolute(texture, left, right, top, bottom)
    }

    /// Build from absolute offsets, rejecting inverted or out-of-range partitions
    pub fn from_absolute(
        texture: Texture,
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    ) -> Result<Self> {
        let valid = 0 <= left
            && left <= right
            && right < texture.width
            && 0 <= top
            && top <= bottom
            && bottom < texture.height;

        if !valid {
            return Err(EngineError::InvalidNineSlice {
                width: texture.width,
                height: texture.height,
                left,
                right,
                top,
                bottom,
            });
        }

        Ok(Self {
            texture,
            left,
            right,
            top,
            bottom,
        })
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }
}

/// A font loaded at a single point size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font {
    pub handle: FontHandle,
    pub point_size: u32,
}

//! Geometry and color types shared by input and rendering
//!
//! Vector math comes from `glam`; this module only adds the rectangle types the
//! compositor speaks in and the letterbox fit used when presenting.

use glam::{IVec2, Vec2};

/// RGBA color, 8 bits per channel
pub type Color = rgb::RGBA8;

pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 255,
};
pub const BLACK: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// Axis-aligned rectangle in logical coordinates (origin + size)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds2 {
    pub position: Vec2,
    pub size: Vec2,
}

impl Bounds2 {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }

    /// Snap to whole pixels, truncating toward zero
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.position.x as i32,
            self.position.y as i32,
            self.size.x as i32,
            self.size.y as i32,
        )
    }
}

/// Rectangle in whole pixels, as handed to the backend
///
/// Width and height are signed so that intermediate nine-slice arithmetic can
/// go negative before the segment is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// True if both dimensions are strictly positive
    pub fn is_visible(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Truncate a logical point to whole pixels
pub fn to_pixel(point: Vec2) -> IVec2 {
    IVec2::new(point.x as i32, point.y as i32)
}

/// Largest rectangle with the resolution's aspect ratio that fits the window,
/// centered on it
pub fn letterbox(window: Vec2, resolution: Vec2) -> Bounds2 {
    let scale = if window.x / window.y > resolution.x / resolution.y {
        window.y / resolution.y
    } else {
        window.x / resolution.x
    };

    let size = resolution * scale;
    Bounds2::new(0.5 * (window - size), size)
}

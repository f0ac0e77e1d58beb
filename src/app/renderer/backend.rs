//! Presentation backend seam
//!
//! Everything that touches a real window, GPU or decoder sits behind
//! [`PresentationBackend`]. Calls are synchronous and expected to return
//! promptly every frame.

use std::path::Path;

use bitflags::bitflags;
use glam::{IVec2, Vec2};

use super::command::Blit;
use super::texture::{Font, Texture};
use crate::app::geometry::{Color, Rect};
use crate::app::input::MouseMode;
use crate::error::Result;

/// Backend identifier of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Backend identifier of a loaded font; also its identity for text caching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle(pub u64);

/// How source pixels combine with the render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// New colors replace old colors based on the alpha of the new color
    #[default]
    Normal,
    /// New colors are added to old colors and get brighter
    Additive,
}

/// How textures are sampled when scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleMode {
    /// Sharp but pixelated
    Nearest,
    /// Smooth but blurry
    #[default]
    Linear,
}

bitflags! {
    /// Mirroring applied when blitting a texture
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mirror: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL = 0b10;
    }
}

/// Per-texture state applied before a blit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureState {
    /// Multiplied with the texture's colors, alpha included
    pub tint: Color,
    pub blend_mode: BlendMode,
    pub scale_mode: ScaleMode,
}

/// Drawing and resource services the compositor and frame driver rely on
pub trait PresentationBackend {
    /// Color and blend mode used by the primitive calls that follow
    fn set_draw_state(&mut self, color: Color, blend_mode: BlendMode);

    fn draw_line(&mut self, start: IVec2, end: IVec2);

    fn draw_rect(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect);

    fn set_texture_state(&mut self, texture: TextureHandle, state: TextureState);

    /// Plain blit of `source` (texture pixels) onto `dest` (target pixels)
    fn copy(&mut self, texture: TextureHandle, source: Rect, dest: Rect);

    /// Rotated and/or mirrored blit
    fn copy_ex(&mut self, blit: &Blit);

    /// Render a string into a new texture owned by the caller
    fn rasterize_text(&mut self, font: &Font, text: &str, color: Color) -> Result<Texture>;

    fn destroy_texture(&mut self, texture: TextureHandle);

    fn load_texture(&mut self, path: &Path) -> Result<Texture>;

    fn load_font(&mut self, path: &Path, point_size: u32) -> Result<Font>;

    fn create_render_target(&mut self, width: i32, height: i32) -> Result<Texture>;

    /// Redirect drawing into a texture, or back to the window with `None`
    fn set_render_target(&mut self, target: Option<TextureHandle>);

    fn clear(&mut self, color: Color);

    /// Current window size in pixels
    fn window_size(&self) -> Vec2;

    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Show, hide or lock the cursor; locking switches to relative motion
    fn set_mouse_mode(&mut self, mode: MouseMode);

    fn present(&mut self);
}

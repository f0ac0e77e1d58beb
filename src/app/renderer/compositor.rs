//! Immediate-mode draw operations on top of a [`PresentationBackend`]
//!
//! The compositor keeps no draw state between calls: every operation sets
//! the backend's color, blend and scale state itself before drawing.

use glam::{IVec2, Vec2};

use super::backend::{BlendMode, Mirror, PresentationBackend, ScaleMode, TextureState};
use super::command::Blit;
use super::nine_slice;
use super::text_cache::TextCache;
use super::texture::{Font, ResizableTexture, Texture};
use crate::app::geometry::{Bounds2, Color, Rect, WHITE, to_pixel};
use crate::error::Result;

/// Horizontal placement of text relative to the draw position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Optional parameters of [`Compositor::draw_texture`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextureDraw {
    /// Tint multiplied with the texture, opaque white when unset
    pub color: Option<Color>,
    /// Destination size, the source size when unset
    pub size: Option<Vec2>,
    /// Clockwise rotation in degrees
    pub rotation: f32,
    /// Offset from the draw position to rotate around, the destination
    /// center when unset
    pub pivot: Option<Vec2>,
    pub mirror: Mirror,
    /// Region of the texture to draw, the whole texture when unset
    pub source: Option<Bounds2>,
    pub blend_mode: BlendMode,
    pub scale_mode: ScaleMode,
}

impl TextureDraw {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn with_mirror(mut self, mirror: Mirror) -> Self {
        self.mirror = mirror;
        self
    }

    pub fn with_source(mut self, source: Bounds2) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }
}

/// Optional parameters of [`Compositor::draw_resizable_texture`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizableDraw {
    pub color: Option<Color>,
    pub blend_mode: BlendMode,
    pub scale_mode: ScaleMode,
}

impl ResizableDraw {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }
}

pub struct Compositor<B> {
    backend: B,
    text_cache: TextCache,
}

impl<B: PresentationBackend> Compositor<B> {
    pub fn new(backend: B, text_cache: TextCache) -> Self {
        Self {
            backend,
            text_cache,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn text_cache(&self) -> &TextCache {
        &self.text_cache
    }

    pub fn into_backend(mut self) -> B {
        self.text_cache.clear(&mut self.backend);
        self.backend
    }

    pub fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.backend.set_draw_state(color, BlendMode::Normal);
        self.backend.draw_line(to_pixel(start), to_pixel(end));
    }

    pub fn draw_rect_empty(&mut self, bounds: Bounds2, color: Color) {
        self.backend.set_draw_state(color, BlendMode::Normal);
        self.backend.draw_rect(bounds.to_rect());
    }

    pub fn draw_rect_solid(&mut self, bounds: Bounds2, color: Color) {
        self.backend.set_draw_state(color, BlendMode::Normal);
        self.backend.fill_rect(bounds.to_rect());
    }

    pub fn draw_texture(&mut self, texture: &Texture, position: Vec2, options: &TextureDraw) {
        self.apply_texture_state(
            texture,
            options.color,
            options.blend_mode,
            options.scale_mode,
        );

        let source = options
            .source
            .map(|bounds| bounds.to_rect())
            .unwrap_or(Rect::new(0, 0, texture.width, texture.height));

        let origin = to_pixel(position);
        let size = options.size.map(to_pixel).unwrap_or(source.size());
        let dest = Rect::new(origin.x, origin.y, size.x, size.y);

        let pivot = options
            .pivot
            .map(to_pixel)
            .unwrap_or(IVec2::new(dest.width / 2, dest.height / 2));

        self.backend.copy_ex(&Blit {
            texture: texture.handle,
            source,
            dest,
            rotation: options.rotation,
            pivot,
            mirror: options.mirror,
        });
    }

    /// Draw a nine-slice texture stretched to `bounds`
    ///
    /// Bounds smaller than the fixed borders are grown to fit them.
    pub fn draw_resizable_texture(
        &mut self,
        texture: &ResizableTexture,
        bounds: Bounds2,
        options: &ResizableDraw,
    ) {
        let inner = *texture.texture();
        self.apply_texture_state(
            &inner,
            options.color,
            options.blend_mode,
            options.scale_mode,
        );

        for segment in nine_slice::decompose(texture, bounds) {
            self.backend
                .copy(inner.handle, segment.source, segment.dest);
        }
    }

    /// Draw `text` and return the area it covers
    ///
    /// With `measure_only` nothing is drawn, but the text is still rasterized
    /// and cached, and the returned bounds are identical.
    pub fn draw_string(
        &mut self,
        text: &str,
        position: Vec2,
        color: Color,
        font: &Font,
        alignment: TextAlignment,
        measure_only: bool,
    ) -> Result<Bounds2> {
        let rendered = self.text_cache.resolve(&mut self.backend, font, text)?;

        let mut position = position;
        match alignment {
            TextAlignment::Left => {}
            TextAlignment::Center => position.x -= (rendered.width / 2) as f32,
            TextAlignment::Right => position.x -= rendered.width as f32,
        }

        if !measure_only {
            self.draw_texture(&rendered, position, &TextureDraw::default().with_color(color));
        }

        Ok(Bounds2::new(position, rendered.size()))
    }

    /// Age the text cache by one frame
    pub fn end_frame(&mut self) -> usize {
        self.text_cache.tick(&mut self.backend)
    }

    fn apply_texture_state(
        &mut self,
        texture: &Texture,
        color: Option<Color>,
        blend_mode: BlendMode,
        scale_mode: ScaleMode,
    ) {
        self.backend.set_texture_state(
            texture.handle,
            TextureState {
                tint: color.unwrap_or(WHITE),
                blend_mode,
                scale_mode,
            },
        );
    }
}

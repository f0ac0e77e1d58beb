//! Headless backend that records every call
//!
//! Resources are registered up front by path; loading anything else fails the
//! same way a missing file would on a real backend.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use glam::{IVec2, Vec2};

use super::backend::{BlendMode, FontHandle, PresentationBackend, TextureHandle, TextureState};
use super::command::Blit;
use super::texture::{Font, Texture};
use crate::app::geometry::{Color, Rect};
use crate::app::input::MouseMode;
use crate::error::{EngineError, ResourceKind, Result};

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    SetDrawState { color: Color, blend_mode: BlendMode },
    DrawLine { start: IVec2, end: IVec2 },
    DrawRect(Rect),
    FillRect(Rect),
    SetTextureState { texture: TextureHandle, state: TextureState },
    Copy { texture: TextureHandle, source: Rect, dest: Rect },
    CopyEx(Blit),
    RasterizeText { font: FontHandle, text: String, color: Color },
    DestroyTexture(TextureHandle),
    LoadTexture(PathBuf),
    LoadFont { path: PathBuf, point_size: u32 },
    CreateRenderTarget { width: i32, height: i32 },
    SetRenderTarget(Option<TextureHandle>),
    Clear(Color),
    SetFullscreen(bool),
    SetMouseMode(MouseMode),
    Present,
}

impl BackendCall {
    /// True for calls that put pixels on the current target
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            Self::DrawLine { .. }
                | Self::DrawRect(_)
                | Self::FillRect(_)
                | Self::Copy { .. }
                | Self::CopyEx(_)
        )
    }
}

#[derive(Debug)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
    textures: HashMap<PathBuf, IVec2>,
    fonts: HashSet<PathBuf>,
    window_size: Vec2,
    fullscreen: bool,
    mouse_mode: MouseMode,
    next_handle: u64,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            textures: HashMap::new(),
            fonts: HashSet::new(),
            window_size: Vec2::new(1280.0, 720.0),
            fullscreen: false,
            mouse_mode: MouseMode::Visible,
            next_handle: 1,
        }
    }

    /// Make `path` loadable as a texture of the given size
    pub fn with_texture(mut self, path: impl Into<PathBuf>, width: i32, height: i32) -> Self {
        self.textures.insert(path.into(), IVec2::new(width, height));
        self
    }

    /// Make `path` loadable as a font
    pub fn with_font(mut self, path: impl Into<PathBuf>) -> Self {
        self.fonts.insert(path.into());
        self
    }

    pub fn with_window_size(mut self, width: f32, height: f32) -> Self {
        self.window_size = Vec2::new(width, height);
        self
    }

    pub fn set_window_size(&mut self, size: Vec2) {
        self.window_size = size;
    }

    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Drain the recorded calls
    pub fn take_calls(&mut self) -> Vec<BackendCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn mouse_mode(&self) -> MouseMode {
        self.mouse_mode
    }

    pub fn draw_count(&self) -> usize {
        self.calls.iter().filter(|call| call.is_draw()).count()
    }

    pub fn rasterize_count(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::RasterizeText { .. }))
    }

    pub fn destroy_count(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::DestroyTexture(_)))
    }

    pub fn present_count(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::Present))
    }

    /// Every rotated blit recorded so far
    pub fn blits(&self) -> impl Iterator<Item = &Blit> {
        self.calls.iter().filter_map(|call| match call {
            BackendCall::CopyEx(blit) => Some(blit),
            _ => None,
        })
    }

    fn count(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }

    fn allocate(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }
}

impl PresentationBackend for RecordingBackend {
    fn set_draw_state(&mut self, color: Color, blend_mode: BlendMode) {
        self.calls
            .push(BackendCall::SetDrawState { color, blend_mode });
    }

    fn draw_line(&mut self, start: IVec2, end: IVec2) {
        self.calls.push(BackendCall::DrawLine { start, end });
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.calls.push(BackendCall::DrawRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(BackendCall::FillRect(rect));
    }

    fn set_texture_state(&mut self, texture: TextureHandle, state: TextureState) {
        self.calls
            .push(BackendCall::SetTextureState { texture, state });
    }

    fn copy(&mut self, texture: TextureHandle, source: Rect, dest: Rect) {
        self.calls.push(BackendCall::Copy {
            texture,
            source,
            dest,
        });
    }

    fn copy_ex(&mut self, blit: &Blit) {
        self.calls.push(BackendCall::CopyEx(*blit));
    }

    fn rasterize_text(&mut self, font: &Font, text: &str, color: Color) -> Result<Texture> {
        self.calls.push(BackendCall::RasterizeText {
            font: font.handle,
            text: text.to_owned(),
            color,
        });

        let advance = (font.point_size / 2).max(1) as i32;
        let width = text.chars().count() as i32 * advance;
        let handle = TextureHandle(self.allocate());
        Ok(Texture::new(handle, width, font.point_size as i32))
    }

    fn destroy_texture(&mut self, texture: TextureHandle) {
        self.calls.push(BackendCall::DestroyTexture(texture));
    }

    fn load_texture(&mut self, path: &Path) -> Result<Texture> {
        self.calls.push(BackendCall::LoadTexture(path.to_path_buf()));

        let Some(size) = self.textures.get(path).copied() else {
            return Err(EngineError::ResourceLoad {
                kind: ResourceKind::Texture,
                path: path.to_path_buf(),
                reason: "no such file".into(),
            });
        };

        Ok(Texture::new(TextureHandle(self.allocate()), size.x, size.y))
    }

    fn load_font(&mut self, path: &Path, point_size: u32) -> Result<Font> {
        self.calls.push(BackendCall::LoadFont {
            path: path.to_path_buf(),
            point_size,
        });

        if !self.fonts.contains(path) {
            return Err(EngineError::ResourceLoad {
                kind: ResourceKind::Font,
                path: path.to_path_buf(),
                reason: "no such file".into(),
            });
        }

        Ok(Font {
            handle: FontHandle(self.allocate()),
            point_size,
        })
    }

    fn create_render_target(&mut self, width: i32, height: i32) -> Result<Texture> {
        self.calls
            .push(BackendCall::CreateRenderTarget { width, height });

        if width <= 0 || height <= 0 {
            return Err(EngineError::ResourceLoad {
                kind: ResourceKind::RenderTarget,
                path: PathBuf::from(format!("{width}x{height}")),
                reason: "size must be positive".into(),
            });
        }

        Ok(Texture::new(TextureHandle(self.allocate()), width, height))
    }

    fn set_render_target(&mut self, target: Option<TextureHandle>) {
        self.calls.push(BackendCall::SetRenderTarget(target));
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(BackendCall::Clear(color));
    }

    fn window_size(&self) -> Vec2 {
        self.window_size
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
        self.calls.push(BackendCall::SetFullscreen(fullscreen));
    }

    fn set_mouse_mode(&mut self, mode: MouseMode) {
        self.mouse_mode = mode;
        self.calls.push(BackendCall::SetMouseMode(mode));
    }

    fn present(&mut self) {
        self.calls.push(BackendCall::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_resources_fail_to_load() {
        let mut backend = RecordingBackend::new();

        let err = backend.load_texture(Path::new("missing.png")).unwrap_err();
        assert!(matches!(
            err,
            EngineError::ResourceLoad {
                kind: ResourceKind::Texture,
                ..
            }
        ));

        let err = backend.load_font(Path::new("missing.ttf"), 12).unwrap_err();
        assert!(err.to_string().contains("missing.ttf"));
    }

    #[test]
    fn test_registered_texture_keeps_size() {
        let mut backend = RecordingBackend::new().with_texture("knight.png", 16, 24);
        let texture = backend.load_texture(Path::new("knight.png")).unwrap();
        assert_eq!((texture.width, texture.height), (16, 24));
    }

    #[test]
    fn test_handles_are_unique() {
        let mut backend = RecordingBackend::new().with_texture("a.png", 1, 1);
        let a = backend.load_texture(Path::new("a.png")).unwrap();
        let b = backend.load_texture(Path::new("a.png")).unwrap();
        let target = backend.create_render_target(320, 180).unwrap();

        assert_ne!(a.handle, b.handle);
        assert_ne!(b.handle, target.handle);
    }

    #[test]
    fn test_text_metrics() {
        let mut backend = RecordingBackend::new().with_font("f.ttf");
        let font = backend.load_font(Path::new("f.ttf"), 10).unwrap();
        let texture = backend.rasterize_text(&font, "hello", Color::new(255, 255, 255, 255)).unwrap();
        assert_eq!((texture.width, texture.height), (25, 10));
    }

    #[test]
    fn test_mouse_mode_is_recorded() {
        let mut backend = RecordingBackend::new();
        assert_eq!(backend.mouse_mode(), MouseMode::Visible);

        backend.set_mouse_mode(MouseMode::Locked);
        assert_eq!(backend.mouse_mode(), MouseMode::Locked);
        assert_eq!(backend.calls(), &[BackendCall::SetMouseMode(MouseMode::Locked)]);
    }

    #[test]
    fn test_zero_sized_render_target_rejected() {
        let mut backend = RecordingBackend::new();
        let err = backend.create_render_target(0, 100).unwrap_err();
        assert!(matches!(
            err,
            EngineError::ResourceLoad {
                kind: ResourceKind::RenderTarget,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "failed to load render target '0x100': size must be positive"
        );
    }
}

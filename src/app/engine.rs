//! Per-frame engine context handed to the game

use std::path::Path;

use glam::Vec2;
use tracing::{debug, info};

use super::assets::Assets;
use super::geometry::{BLACK, letterbox};
use super::input::{InputCollector, Key, MouseMode};
use super::renderer::{
    Compositor, Font, PresentationBackend, ResizableTexture, ScaleMode, TextCache, Texture,
    TextureDraw,
};
use crate::config::EngineConfig;
use crate::error::Result;

/// Everything a game can reach during `update`
///
/// The game draws into a fixed-resolution render target; the engine scales
/// it into the window when the frame is presented.
pub struct Engine<B> {
    config: EngineConfig,
    input: InputCollector,
    graphics: Compositor<B>,
    assets: Assets,
    render_target: Texture,
    resolution: Vec2,
    fullscreen: bool,
    mouse_mode: MouseMode,
    time_delta: f32,
}

impl<B: PresentationBackend> Engine<B> {
    pub fn new(mut backend: B, config: EngineConfig) -> Result<Self> {
        let resolution = Vec2::new(config.window.width, config.window.height);
        let render_target =
            backend.create_render_target(resolution.x as i32, resolution.y as i32)?;

        let fullscreen = config.window.fullscreen;
        if fullscreen {
            backend.set_fullscreen(true);
        }

        info!(
            title = %config.window.title,
            width = render_target.width,
            height = render_target.height,
            fullscreen,
            "Engine started"
        );

        Ok(Self {
            input: InputCollector::new(config.input.gamepad_slots),
            graphics: Compositor::new(backend, TextCache::new(config.text.max_age)),
            assets: Assets::new(config.assets.root.clone()),
            render_target,
            resolution,
            fullscreen,
            mouse_mode: MouseMode::default(),
            time_delta: 0.0,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn input(&self) -> &InputCollector {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputCollector {
        &mut self.input
    }

    pub fn graphics(&self) -> &Compositor<B> {
        &self.graphics
    }

    pub fn graphics_mut(&mut self) -> &mut Compositor<B> {
        &mut self.graphics
    }

    /// Seconds elapsed since the previous frame started
    pub fn time_delta(&self) -> f32 {
        self.time_delta
    }

    /// Size of the render target the game draws into
    pub fn resolution(&self) -> Vec2 {
        self.resolution
    }

    pub fn render_target(&self) -> Texture {
        self.render_target
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen != fullscreen {
            self.fullscreen = fullscreen;
            self.graphics.backend_mut().set_fullscreen(fullscreen);
            info!(fullscreen, "Display mode changed");
        }
    }

    pub fn mouse_mode(&self) -> MouseMode {
        self.mouse_mode
    }

    pub fn set_mouse_mode(&mut self, mode: MouseMode) {
        self.mouse_mode = mode;
        self.graphics.backend_mut().set_mouse_mode(mode);
        debug!(?mode, "Mouse mode changed");
    }

    pub fn load_texture(&mut self, path: impl AsRef<Path>) -> Result<Texture> {
        self.assets
            .load_texture(self.graphics.backend_mut(), path)
    }

    /// Load a nine-slice texture; offsets are measured inward from each edge
    pub fn load_resizable_texture(
        &mut self,
        path: impl AsRef<Path>,
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    ) -> Result<ResizableTexture> {
        self.assets.load_resizable_texture(
            self.graphics.backend_mut(),
            path,
            left,
            right,
            top,
            bottom,
        )
    }

    pub fn load_font(&mut self, path: impl AsRef<Path>, point_size: u32) -> Result<Font> {
        self.assets
            .load_font(self.graphics.backend_mut(), path, point_size)
    }

    pub(crate) fn set_time_delta(&mut self, time_delta: f32) {
        self.time_delta = time_delta;
    }

    /// Alt+Enter flips between windowed and fullscreen
    pub(crate) fn handle_fullscreen_hotkey(&mut self) {
        let alt_held = self.input.key_held(Key::LeftAlt) || self.input.key_held(Key::RightAlt);
        if alt_held && self.input.key_down(Key::Return, false) {
            self.set_fullscreen(!self.fullscreen);
        }
    }

    /// Redirect drawing into the render target and clear it
    pub(crate) fn begin_drawing(&mut self) {
        let backend = self.graphics.backend_mut();
        backend.set_render_target(Some(self.render_target.handle));
        backend.clear(BLACK);
    }

    /// Scale the render target into the window, present, and age the text cache
    pub(crate) fn present(&mut self) {
        let window = self.graphics.backend().window_size();
        let fit = letterbox(window, self.resolution);

        let backend = self.graphics.backend_mut();
        backend.set_render_target(None);
        backend.clear(BLACK);

        let target = self.render_target;
        self.graphics.draw_texture(
            &target,
            fit.position,
            &TextureDraw::default()
                .with_size(fit.size)
                .with_scale_mode(ScaleMode::Nearest),
        );

        self.graphics.backend_mut().present();
        self.graphics.end_frame();
    }

    /// Tear down, releasing cached text, and hand the backend back
    pub fn into_backend(self) -> B {
        self.graphics.into_backend()
    }
}

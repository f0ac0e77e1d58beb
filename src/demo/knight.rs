//! A knight walking over a background, steered with the arrow keys

use glam::Vec2;

use crate::app::geometry::Bounds2;
use crate::app::input::Key;
use crate::app::renderer::{Mirror, PresentationBackend, Texture, TextureDraw};
use crate::app::{Engine, Game};
use crate::error::Result;

pub const KNIGHT_TEXTURE: &str = "knight.png";
pub const BACKGROUND_TEXTURE: &str = "background.png";

/// Animation frames per second
const FRAMERATE: f32 = 10.0;
/// Pixels per second
const WALK_SPEED: f32 = 50.0;
/// Frames in each animation row
const FRAME_COUNT: f32 = 6.0;
/// Side length of one animation frame
const FRAME_SIZE: f32 = 16.0;

pub struct KnightDemo {
    knight: Texture,
    background: Texture,
    position: Vec2,
    face_left: bool,
    frame_index: f32,
}

impl KnightDemo {
    /// Load the demo's textures and place the knight mid-screen
    pub fn new<B: PresentationBackend>(engine: &mut Engine<B>) -> Result<Self> {
        Ok(Self {
            knight: engine.load_texture(KNIGHT_TEXTURE)?,
            background: engine.load_texture(BACKGROUND_TEXTURE)?,
            position: engine.resolution() / 2.0,
            face_left: false,
            frame_index: 0.0,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn faces_left(&self) -> bool {
        self.face_left
    }

    /// Region of the sprite sheet for the current frame
    ///
    /// The top row is the idle loop, the second row the walk loop.
    pub fn frame_source(&self, idle: bool) -> Bounds2 {
        let column = self.frame_index.floor() * FRAME_SIZE;
        let row = if idle { 0.0 } else { FRAME_SIZE };
        Bounds2::from_xywh(column, row, FRAME_SIZE, FRAME_SIZE)
    }
}

impl<B: PresentationBackend> Game<B> for KnightDemo {
    fn update(&mut self, engine: &mut Engine<B>) -> Result<()> {
        let background = self.background;
        engine
            .graphics_mut()
            .draw_texture(&background, Vec2::ZERO, &TextureDraw::default());

        let input = engine.input();
        let mut offset = Vec2::ZERO;
        if input.key_held(Key::Left) {
            offset.x -= 1.0;
            self.face_left = true;
        }
        if input.key_held(Key::Right) {
            offset.x += 1.0;
            self.face_left = false;
        }
        if input.key_held(Key::Up) {
            offset.y -= 1.0;
        }
        if input.key_held(Key::Down) {
            offset.y += 1.0;
        }

        let dt = engine.time_delta();
        self.position += offset * WALK_SPEED * dt;
        self.frame_index = (self.frame_index + dt * FRAMERATE) % FRAME_COUNT;

        let idle = offset == Vec2::ZERO;
        let mirror = if self.face_left {
            Mirror::HORIZONTAL
        } else {
            Mirror::empty()
        };

        let knight = self.knight;
        let half = Vec2::splat(FRAME_SIZE / 2.0);
        engine.graphics_mut().draw_texture(
            &knight,
            self.position - half,
            &TextureDraw::default()
                .with_source(self.frame_source(idle))
                .with_mirror(mirror),
        );

        Ok(())
    }
}

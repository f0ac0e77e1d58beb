//! Frame driver: poll, update, present, repeat

use std::time::Instant;

use tracing::{debug, info};

use super::engine::Engine;
use super::input::{EventSource, PollStatus};
use super::renderer::PresentationBackend;
use crate::error::Result;

/// Application logic driven once per frame
pub trait Game<B: PresentationBackend> {
    /// Read input and draw the frame
    ///
    /// Called with the render target already bound and cleared.
    fn update(&mut self, engine: &mut Engine<B>) -> Result<()>;
}

/// Outcome of a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

/// Owns the engine, the game and the event source and runs the frame loop
pub struct FrameDriver<B, G, S> {
    engine: Engine<B>,
    game: G,
    events: S,
    last_frame: Instant,
    fixed_time_step: Option<f32>,
    frames: u64,
}

impl<B, G, S> FrameDriver<B, G, S>
where
    B: PresentationBackend,
    G: Game<B>,
    S: EventSource,
{
    pub fn new(engine: Engine<B>, game: G, events: S) -> Self {
        Self {
            engine,
            game,
            events,
            last_frame: Instant::now(),
            fixed_time_step: None,
            frames: 0,
        }
    }

    /// Report a constant frame time instead of measuring wall-clock time
    pub fn with_fixed_time_step(mut self, seconds: f32) -> Self {
        self.fixed_time_step = Some(seconds);
        self
    }

    pub fn engine(&self) -> &Engine<B> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<B> {
        &mut self.engine
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn events_mut(&mut self) -> &mut S {
        &mut self.events
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame
    ///
    /// Returns [`FrameStatus::Quit`] as soon as the event source reports
    /// quit; the game is not updated for that frame.
    pub fn step(&mut self) -> Result<FrameStatus> {
        let now = Instant::now();
        let measured = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.engine
            .set_time_delta(self.fixed_time_step.unwrap_or(measured));

        if self.engine.input_mut().poll(&mut self.events) == PollStatus::Quit {
            return Ok(FrameStatus::Quit);
        }

        self.engine.handle_fullscreen_hotkey();
        self.engine.begin_drawing();
        self.game.update(&mut self.engine)?;
        self.engine.present();

        self.frames += 1;
        Ok(FrameStatus::Continue)
    }

    /// Run at most `frames` frames, stopping early on quit
    pub fn run_frames(&mut self, frames: u64) -> Result<FrameStatus> {
        for _ in 0..frames {
            if self.step()? == FrameStatus::Quit {
                info!(frames = self.frames, "Quit requested");
                return Ok(FrameStatus::Quit);
            }
        }

        debug!(frames = self.frames, "Frame budget exhausted");
        Ok(FrameStatus::Continue)
    }

    /// Run until quit, then terminate the process
    ///
    /// Only returns on error.
    pub fn run(mut self) -> Result<()> {
        info!("Entering frame loop");
        loop {
            if self.step()? == FrameStatus::Quit {
                info!(frames = self.frames, "Quit requested, exiting");
                std::process::exit(0);
            }
        }
    }

    pub fn into_parts(self) -> (Engine<B>, G, S) {
        (self.engine, self.game, self.events)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::app::geometry::{BLACK, Rect};
    use crate::app::input::{Key, MouseMode, RawEvent, ScriptedEvents};
    use crate::app::renderer::{BackendCall, RecordingBackend, ScaleMode};
    use crate::config::EngineConfig;

    /// Counts updates and remembers what input looked like
    #[derive(Default)]
    struct Observer {
        updates: u32,
        saw_space: bool,
        deltas: Vec<f32>,
    }

    impl<B: PresentationBackend> Game<B> for Observer {
        fn update(&mut self, engine: &mut Engine<B>) -> Result<()> {
            self.updates += 1;
            self.saw_space |= engine.input().key_down(Key::Space, false);
            self.deltas.push(engine.time_delta());
            Ok(())
        }
    }

    fn driver(window: Vec2) -> FrameDriver<RecordingBackend, Observer, ScriptedEvents> {
        let mut config = EngineConfig::default();
        config.window.width = 128.0;
        config.window.height = 128.0;

        let backend = RecordingBackend::new().with_window_size(window.x, window.y);
        let engine = Engine::new(backend, config).unwrap();
        FrameDriver::new(engine, Observer::default(), ScriptedEvents::new())
    }

    #[test]
    fn test_frame_order() {
        let mut driver = driver(Vec2::new(256.0, 128.0));
        let target = driver.engine().render_target();
        driver.engine_mut().graphics_mut().backend_mut().clear_calls();

        assert_eq!(driver.step().unwrap(), FrameStatus::Continue);

        let calls = driver.engine().graphics().backend().calls();
        assert_eq!(calls[0], BackendCall::SetRenderTarget(Some(target.handle)));
        assert_eq!(calls[1], BackendCall::Clear(BLACK));
        assert_eq!(calls[2], BackendCall::SetRenderTarget(None));
        assert_eq!(calls[3], BackendCall::Clear(BLACK));
        assert!(matches!(
            calls[4],
            BackendCall::SetTextureState { state, .. } if state.scale_mode == ScaleMode::Nearest
        ));
        assert!(matches!(calls[5], BackendCall::CopyEx(_)));
        assert_eq!(calls[6], BackendCall::Present);
    }

    #[test]
    fn test_render_target_letterboxed_into_window() {
        let mut driver = driver(Vec2::new(256.0, 128.0));
        driver.step().unwrap();

        let blit = driver
            .engine()
            .graphics()
            .backend()
            .blits()
            .last()
            .copied()
            .unwrap();
        assert_eq!(blit.source, Rect::new(0, 0, 128, 128));
        assert_eq!(blit.dest, Rect::new(64, 0, 128, 128));
    }

    #[test]
    fn test_quit_skips_update() {
        let mut driver = driver(Vec2::new(128.0, 128.0));
        driver
            .events_mut()
            .push(RawEvent::KeyDown {
                key: Key::Space,
                repeat: false,
            })
            .push(RawEvent::Quit);

        assert_eq!(driver.run_frames(5).unwrap(), FrameStatus::Quit);
        assert_eq!(driver.game().updates, 0);
        assert_eq!(driver.frames(), 0);
    }

    #[test]
    fn test_game_sees_polled_input() {
        let mut driver = driver(Vec2::new(128.0, 128.0));
        driver.events_mut().push(RawEvent::KeyDown {
            key: Key::Space,
            repeat: false,
        });

        driver.step().unwrap();
        assert!(driver.game().saw_space);
    }

    #[test]
    fn test_fixed_time_step() {
        let mut driver = driver(Vec2::new(128.0, 128.0)).with_fixed_time_step(0.25);
        driver.run_frames(3).unwrap();
        assert_eq!(driver.game().deltas, vec![0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_alt_enter_toggles_fullscreen() {
        let mut driver = driver(Vec2::new(128.0, 128.0));
        driver.events_mut().extend([
            RawEvent::KeyDown {
                key: Key::LeftAlt,
                repeat: false,
            },
            RawEvent::KeyDown {
                key: Key::Return,
                repeat: false,
            },
        ]);

        driver.step().unwrap();
        assert!(driver.engine().is_fullscreen());
        assert!(driver.engine().graphics().backend().is_fullscreen());

        // Alt still held, Enter only held: no second toggle
        driver.step().unwrap();
        assert!(driver.engine().is_fullscreen());

        driver.events_mut().extend([
            RawEvent::KeyUp(Key::Return),
            RawEvent::KeyDown {
                key: Key::Return,
                repeat: false,
            },
        ]);
        driver.step().unwrap();
        assert!(!driver.engine().is_fullscreen());
    }

    #[test]
    fn test_mouse_mode_reaches_backend() {
        let mut driver = driver(Vec2::new(128.0, 128.0));
        assert_eq!(driver.engine().mouse_mode(), MouseMode::Visible);

        driver.engine_mut().set_mouse_mode(MouseMode::Hidden);
        assert_eq!(driver.engine().mouse_mode(), MouseMode::Hidden);

        let backend = driver.engine().graphics().backend();
        assert_eq!(backend.mouse_mode(), MouseMode::Hidden);
        assert_eq!(
            backend.calls().last(),
            Some(&BackendCall::SetMouseMode(MouseMode::Hidden))
        );
    }

    #[test]
    fn test_enter_without_alt_does_nothing() {
        let mut driver = driver(Vec2::new(128.0, 128.0));
        driver.events_mut().push(RawEvent::KeyDown {
            key: Key::Return,
            repeat: false,
        });

        driver.step().unwrap();
        assert!(!driver.engine().is_fullscreen());
    }
}

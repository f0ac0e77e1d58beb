//! Frame layer between a presentation backend and game logic
//!
//! Handles input collection, compositing and the frame loop.

pub mod assets;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod renderer;
mod runner;

pub use assets::Assets;
pub use engine::Engine;
pub use geometry::{Bounds2, Color, Rect};
pub use runner::{FrameDriver, FrameStatus, Game};

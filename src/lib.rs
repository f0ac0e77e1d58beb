//! framekit
//!
//! A small frame layer for 2D games: per-frame input state, a compositor for
//! textures, nine-slice panels and cached text, and a letterboxing frame loop
//! over a pluggable presentation backend.

/// Input, rendering and the frame loop
pub mod app;

/// Build-time information (timestamp, target, compiler, git revision)
pub mod build_info;

/// Profile-based engine configuration
pub mod config;

/// Sample games
pub mod demo;

/// Engine error type
pub mod error;

/// Startup diagnostics
pub mod health;

pub use config::EngineConfig;
pub use error::{EngineError, Result};

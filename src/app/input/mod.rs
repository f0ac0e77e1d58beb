//! Input state engine
//!
//! Reduces the raw device event stream into per-frame input state:
//! - Edge-triggered down/up sets and level-triggered held sets for keys,
//!   mouse buttons and gamepad buttons
//! - Pointer position, motion and scroll
//! - Typed text
//! - Gamepad hot-plug with stable player slots
//!
//! # Architecture
//!
//! ```text
//! EventSource (winit, scripted) → InputCollector::poll → queries
//!                                       ↓
//!                                GamepadRegistry
//!                              (device id ↔ slot)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! // Each frame, before anything reads input
//! if input.poll(&mut source) == PollStatus::Quit {
//!     std::process::exit(0);
//! }
//! if input.key_down(Key::Space, false) { /* jump */ }
//! ```

mod collector;
mod events;
mod gamepad;
mod source;
mod state;
mod winit_source;

// Re-export public API
pub use collector::{InputCollector, PollStatus};
pub use events::{
    DeviceId, GamepadAxis, GamepadButton, Key, MouseButton, MouseMode, RawAxis, RawEvent,
};
pub use gamepad::{Gamepad, GamepadRegistry};
pub use source::{EventSource, ScriptedEvents};
pub use state::{ButtonSet, PointerState};
pub use winit_source::WinitEventQueue;

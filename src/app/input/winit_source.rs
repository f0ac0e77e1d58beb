//! Device event source fed by winit window events
//!
//! Adapter for an embedding winit event loop: forward each `WindowEvent` to
//! [`WinitEventQueue::handle_window_event`] and hand the queue to the input poll.

use std::collections::VecDeque;

use glam::Vec2;
use winit::event::{ElementState, Ime, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::events::{Key, MouseButton, RawEvent};
use super::source::EventSource;

/// Pixels per wheel "line" when the platform reports pixel deltas
const PIXELS_PER_LINE: f32 = 20.0;

/// Queues translated winit events until the next input poll
///
/// winit only reports absolute cursor positions, so motion deltas are derived
/// from the previously seen position.
#[derive(Debug, Default)]
pub struct WinitEventQueue {
    pending: VecDeque<RawEvent>,
    last_position: Option<Vec2>,
}

impl WinitEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event; events with no input meaning are dropped
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer_moved(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = mouse_button(*button) {
                    self.pending.push_back(match state {
                        ElementState::Pressed => RawEvent::MouseButtonDown(button),
                        ElementState::Released => RawEvent::MouseButtonUp(button),
                    });
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.pending.push_back(RawEvent::Wheel(scroll_amount(*delta)));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let key = match event.physical_key {
                    PhysicalKey::Code(code) => Key::from(code),
                    PhysicalKey::Unidentified(_) => Key::Other,
                };

                match event.state {
                    ElementState::Pressed => {
                        self.pending.push_back(RawEvent::KeyDown {
                            key,
                            repeat: event.repeat,
                        });
                        if let Some(text) = &event.text {
                            self.pending.push_back(RawEvent::TextInput(text.to_string()));
                        }
                    }
                    ElementState::Released => self.pending.push_back(RawEvent::KeyUp(key)),
                }
            }

            WindowEvent::Ime(Ime::Commit(text)) => {
                self.pending.push_back(RawEvent::TextInput(text.clone()));
            }

            WindowEvent::CloseRequested => self.pending.push_back(RawEvent::Quit),

            _ => {}
        }
    }

    fn pointer_moved(&mut self, position: Vec2) {
        let delta = self
            .last_position
            .map_or(Vec2::ZERO, |previous| position - previous);
        self.last_position = Some(position);
        self.pending
            .push_back(RawEvent::PointerMotion { position, delta });
    }
}

impl EventSource for WinitEventQueue {
    fn poll_event(&mut self) -> Option<RawEvent> {
        self.pending.pop_front()
    }
}

fn mouse_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        _ => None,
    }
}

/// Vertical scroll in wheel units
fn scroll_amount(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
    }
}

/// Convert from a winit physical key code
impl From<winit::keyboard::KeyCode> for Key {
    fn from(code: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as WK;
        match code {
            WK::Enter => Self::Return,
            WK::Escape => Self::Escape,
            WK::Backspace => Self::Backspace,
            WK::Tab => Self::Tab,
            WK::Space => Self::Space,
            WK::Delete => Self::Delete,

            WK::Quote => Self::SingleQuote,
            WK::Comma => Self::Comma,
            WK::Minus => Self::Minus,
            WK::Period => Self::Period,
            WK::Slash => Self::Slash,
            WK::Semicolon => Self::Semicolon,
            WK::Equal => Self::Equals,
            WK::BracketLeft => Self::LeftBracket,
            WK::Backslash => Self::Backslash,
            WK::BracketRight => Self::RightBracket,
            WK::Backquote => Self::Backquote,

            WK::Digit0 => Self::NumRow0,
            WK::Digit1 => Self::NumRow1,
            WK::Digit2 => Self::NumRow2,
            WK::Digit3 => Self::NumRow3,
            WK::Digit4 => Self::NumRow4,
            WK::Digit5 => Self::NumRow5,
            WK::Digit6 => Self::NumRow6,
            WK::Digit7 => Self::NumRow7,
            WK::Digit8 => Self::NumRow8,
            WK::Digit9 => Self::NumRow9,

            WK::KeyA => Self::A,
            WK::KeyB => Self::B,
            WK::KeyC => Self::C,
            WK::KeyD => Self::D,
            WK::KeyE => Self::E,
            WK::KeyF => Self::F,
            WK::KeyG => Self::G,
            WK::KeyH => Self::H,
            WK::KeyI => Self::I,
            WK::KeyJ => Self::J,
            WK::KeyK => Self::K,
            WK::KeyL => Self::L,
            WK::KeyM => Self::M,
            WK::KeyN => Self::N,
            WK::KeyO => Self::O,
            WK::KeyP => Self::P,
            WK::KeyQ => Self::Q,
            WK::KeyR => Self::R,
            WK::KeyS => Self::S,
            WK::KeyT => Self::T,
            WK::KeyU => Self::U,
            WK::KeyV => Self::V,
            WK::KeyW => Self::W,
            WK::KeyX => Self::X,
            WK::KeyY => Self::Y,
            WK::KeyZ => Self::Z,

            WK::CapsLock => Self::CapsLock,
            WK::F1 => Self::F1,
            WK::F2 => Self::F2,
            WK::F3 => Self::F3,
            WK::F4 => Self::F4,
            WK::F5 => Self::F5,
            WK::F6 => Self::F6,
            WK::F7 => Self::F7,
            WK::F8 => Self::F8,
            WK::F9 => Self::F9,
            WK::F10 => Self::F10,
            WK::F11 => Self::F11,
            WK::F12 => Self::F12,
            WK::PrintScreen => Self::PrintScreen,
            WK::ScrollLock => Self::ScrollLock,
            WK::Pause => Self::Pause,

            WK::Insert => Self::Insert,
            WK::Home => Self::Home,
            WK::PageUp => Self::PageUp,
            WK::End => Self::End,
            WK::PageDown => Self::PageDown,
            WK::ArrowRight => Self::Right,
            WK::ArrowLeft => Self::Left,
            WK::ArrowDown => Self::Down,
            WK::ArrowUp => Self::Up,

            WK::NumpadDivide => Self::NumpadDivide,
            WK::NumpadMultiply => Self::NumpadMultiply,
            WK::NumpadSubtract => Self::NumpadMinus,
            WK::NumpadAdd => Self::NumpadPlus,
            WK::NumpadEnter => Self::NumpadEnter,
            WK::Numpad0 => Self::Numpad0,
            WK::Numpad1 => Self::Numpad1,
            WK::Numpad2 => Self::Numpad2,
            WK::Numpad3 => Self::Numpad3,
            WK::Numpad4 => Self::Numpad4,
            WK::Numpad5 => Self::Numpad5,
            WK::Numpad6 => Self::Numpad6,
            WK::Numpad7 => Self::Numpad7,
            WK::Numpad8 => Self::Numpad8,
            WK::Numpad9 => Self::Numpad9,
            WK::NumpadDecimal => Self::NumpadPeriod,

            WK::ControlLeft => Self::LeftControl,
            WK::ShiftLeft => Self::LeftShift,
            WK::AltLeft => Self::LeftAlt,
            WK::ControlRight => Self::RightControl,
            WK::ShiftRight => Self::RightShift,
            WK::AltRight => Self::RightAlt,

            _ => Self::Other,
        }
    }
}

//! Reduces raw device events into queryable per-frame input state

use glam::Vec2;
use tracing::{debug, info, trace};

use super::events::{DeviceId, GamepadAxis, GamepadButton, Key, MouseButton, RawEvent};
use super::gamepad::GamepadRegistry;
use super::source::EventSource;
use super::state::{ButtonSet, PointerState};

/// Result of draining the event source for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    Continue,
    /// A quit event was seen; no further events were consumed
    Quit,
}

/// Input state engine
///
/// Call [`InputCollector::poll`] exactly once per frame before any query; the
/// queries then describe that frame until the next poll.
#[derive(Debug, Clone)]
pub struct InputCollector {
    keys: ButtonSet<Key>,
    mouse_buttons: ButtonSet<MouseButton>,
    pointer: PointerState,
    typed_text: String,
    gamepads: GamepadRegistry,
}

impl InputCollector {
    /// Creates a collector with the given number of gamepad player slots
    pub fn new(gamepad_slots: usize) -> Self {
        Self {
            keys: ButtonSet::new(),
            mouse_buttons: ButtonSet::new(),
            pointer: PointerState::default(),
            typed_text: String::new(),
            gamepads: GamepadRegistry::new(gamepad_slots),
        }
    }

    /// Reset per-frame state, then drain every pending event from the source
    pub fn poll(&mut self, source: &mut dyn EventSource) -> PollStatus {
        self.begin_frame();

        let mut consumed = 0usize;
        while let Some(event) = source.poll_event() {
            consumed += 1;
            if self.apply(event, source) == PollStatus::Quit {
                info!("Quit event received");
                return PollStatus::Quit;
            }
        }

        trace!(events = consumed, "Input polled");
        PollStatus::Continue
    }

    fn begin_frame(&mut self) {
        self.keys.begin_frame();
        self.mouse_buttons.begin_frame();
        self.pointer.begin_frame();
        self.typed_text.clear();
        self.gamepads.begin_frame();
    }

    fn apply(&mut self, event: RawEvent, source: &mut dyn EventSource) -> PollStatus {
        match event {
            RawEvent::PointerMotion { position, delta } => {
                self.pointer.position = position;
                self.pointer.motion = delta;
            }
            RawEvent::MouseButtonDown(button) => self.mouse_buttons.press(button, false),
            RawEvent::MouseButtonUp(button) => self.mouse_buttons.release(button),
            RawEvent::Wheel(amount) => self.pointer.scroll = amount,
            RawEvent::KeyDown { key, repeat } => self.keys.press(key, repeat),
            RawEvent::KeyUp(key) => self.keys.release(key),
            RawEvent::TextInput(text) => {
                // One character per event, even for multi-character input
                if let Some(first) = text.chars().next() {
                    self.typed_text.push(first);
                }
            }
            RawEvent::GamepadAttached(device) => {
                // Open only once per tracked device; close runs once on detach
                if !self.gamepads.contains(device) {
                    source.open_gamepad(device);
                }
                self.gamepads.attach(device);
            }
            RawEvent::GamepadDetached(device) => {
                if self.gamepads.detach(device) {
                    source.close_gamepad(device);
                }
            }
            RawEvent::GamepadAxisMotion {
                device,
                axis,
                value,
            } => {
                if let Some(pad) = self.gamepads.device_mut(device) {
                    pad.set_axis(axis, axis.normalize(value));
                }
            }
            RawEvent::GamepadButtonDown { device, button } => {
                self.with_pad(device, |buttons| buttons.press(button, false));
            }
            RawEvent::GamepadButtonUp { device, button } => {
                self.with_pad(device, |buttons| buttons.release(button));
            }
            RawEvent::Quit => return PollStatus::Quit,
        }
        PollStatus::Continue
    }

    fn with_pad(&mut self, device: DeviceId, f: impl FnOnce(&mut ButtonSet<GamepadButton>)) {
        match self.gamepads.device_mut(device) {
            Some(pad) => f(&mut pad.buttons),
            None => debug!(device = device.0, "Button event for unknown gamepad ignored"),
        }
    }

    // Keyboard

    /// Pressed this frame; autorepeat signals count only when allowed
    pub fn key_down(&self, key: Key, allow_autorepeat: bool) -> bool {
        self.keys.is_down(key, allow_autorepeat)
    }

    pub fn key_held(&self, key: Key) -> bool {
        self.keys.is_held(key)
    }

    pub fn key_up(&self, key: Key) -> bool {
        self.keys.is_up(key)
    }

    /// Text typed this frame
    pub fn typed_text(&self) -> &str {
        &self.typed_text
    }

    // Mouse

    pub fn mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.is_down(button, false)
    }

    pub fn mouse_button_held(&self, button: MouseButton) -> bool {
        self.mouse_buttons.is_held(button)
    }

    pub fn mouse_button_up(&self, button: MouseButton) -> bool {
        self.mouse_buttons.is_up(button)
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.pointer.position
    }

    pub fn mouse_motion(&self) -> Vec2 {
        self.pointer.motion
    }

    pub fn mouse_scroll(&self) -> f32 {
        self.pointer.scroll
    }

    // Gamepads

    /// True iff a gamepad occupies this player slot
    pub fn gamepad_connected(&self, slot: usize) -> bool {
        self.gamepads.by_slot(slot).is_some()
    }

    /// Axis pair of a player's gamepad, zero when not connected
    pub fn gamepad_axis(&self, slot: usize, axis: GamepadAxis) -> Vec2 {
        self.gamepads
            .by_slot(slot)
            .map_or(Vec2::ZERO, |pad| pad.axis(axis))
    }

    pub fn gamepad_button_down(&self, slot: usize, button: GamepadButton) -> bool {
        self.gamepads
            .by_slot(slot)
            .is_some_and(|pad| pad.buttons.is_down(button, false))
    }

    pub fn gamepad_button_held(&self, slot: usize, button: GamepadButton) -> bool {
        self.gamepads
            .by_slot(slot)
            .is_some_and(|pad| pad.buttons.is_held(button))
    }

    pub fn gamepad_button_up(&self, slot: usize, button: GamepadButton) -> bool {
        self.gamepads
            .by_slot(slot)
            .is_some_and(|pad| pad.buttons.is_up(button))
    }

    pub fn gamepads(&self) -> &GamepadRegistry {
        &self.gamepads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input::events::RawAxis;
    use crate::app::input::source::ScriptedEvents;

    fn frame(input: &mut InputCollector, events: Vec<RawEvent>) -> PollStatus {
        let mut source = ScriptedEvents::new();
        source.extend(events);
        input.poll(&mut source)
    }

    #[test]
    fn test_key_down_fires_once_per_press() {
        let mut input = InputCollector::new(4);
        frame(
            &mut input,
            vec![RawEvent::KeyDown {
                key: Key::Space,
                repeat: false,
            }],
        );
        assert!(input.key_down(Key::Space, false));
        assert!(input.key_held(Key::Space));

        for _ in 0..3 {
            frame(&mut input, vec![]);
            assert!(!input.key_down(Key::Space, false));
            assert!(input.key_held(Key::Space));
        }

        frame(&mut input, vec![RawEvent::KeyUp(Key::Space)]);
        assert!(input.key_up(Key::Space));
        assert!(!input.key_held(Key::Space));

        frame(&mut input, vec![]);
        assert!(!input.key_up(Key::Space));
    }

    #[test]
    fn test_autorepeat_needs_opt_in() {
        let mut input = InputCollector::new(4);
        frame(
            &mut input,
            vec![RawEvent::KeyDown {
                key: Key::Left,
                repeat: false,
            }],
        );
        frame(
            &mut input,
            vec![RawEvent::KeyDown {
                key: Key::Left,
                repeat: true,
            }],
        );

        assert!(!input.key_down(Key::Left, false));
        assert!(input.key_down(Key::Left, true));
        assert!(input.key_held(Key::Left));

        frame(&mut input, vec![]);
        assert!(!input.key_down(Key::Left, true));
        assert!(input.key_held(Key::Left));
    }

    #[test]
    fn test_pointer_last_event_wins() {
        let mut input = InputCollector::new(4);
        frame(
            &mut input,
            vec![
                RawEvent::PointerMotion {
                    position: Vec2::new(10.0, 10.0),
                    delta: Vec2::new(3.0, 0.0),
                },
                RawEvent::PointerMotion {
                    position: Vec2::new(12.0, 11.0),
                    delta: Vec2::new(2.0, 1.0),
                },
                RawEvent::Wheel(1.0),
                RawEvent::Wheel(-2.0),
            ],
        );
        assert_eq!(input.mouse_position(), Vec2::new(12.0, 11.0));
        assert_eq!(input.mouse_motion(), Vec2::new(2.0, 1.0));
        assert_eq!(input.mouse_scroll(), -2.0);

        frame(&mut input, vec![]);
        assert_eq!(input.mouse_position(), Vec2::new(12.0, 11.0));
        assert_eq!(input.mouse_motion(), Vec2::ZERO);
        assert_eq!(input.mouse_scroll(), 0.0);
    }

    #[test]
    fn test_mouse_buttons() {
        let mut input = InputCollector::new(4);
        frame(&mut input, vec![RawEvent::MouseButtonDown(MouseButton::Right)]);
        assert!(input.mouse_button_down(MouseButton::Right));
        assert!(input.mouse_button_held(MouseButton::Right));
        assert!(!input.mouse_button_held(MouseButton::Left));

        frame(&mut input, vec![RawEvent::MouseButtonUp(MouseButton::Right)]);
        assert!(!input.mouse_button_down(MouseButton::Right));
        assert!(input.mouse_button_up(MouseButton::Right));
        assert!(!input.mouse_button_held(MouseButton::Right));
    }

    #[test]
    fn test_typed_text_keeps_first_character() {
        let mut input = InputCollector::new(4);
        frame(
            &mut input,
            vec![
                RawEvent::TextInput("h".into()),
                RawEvent::TextInput("éx".into()),
                RawEvent::TextInput(String::new()),
            ],
        );
        assert_eq!(input.typed_text(), "hé");

        frame(&mut input, vec![]);
        assert_eq!(input.typed_text(), "");
    }

    #[test]
    fn test_gamepad_lifecycle() {
        let mut input = InputCollector::new(2);
        let mut source = ScriptedEvents::new();
        source.extend([
            RawEvent::GamepadAttached(DeviceId(7)),
            RawEvent::GamepadButtonDown {
                device: DeviceId(7),
                button: GamepadButton::A,
            },
            RawEvent::GamepadAxisMotion {
                device: DeviceId(7),
                axis: RawAxis::LeftX,
                value: i16::MAX,
            },
        ]);
        input.poll(&mut source);

        assert!(input.gamepad_connected(0));
        assert!(input.gamepad_button_down(0, GamepadButton::A));
        assert!(input.gamepad_button_held(0, GamepadButton::A));
        assert_eq!(
            input.gamepad_axis(0, GamepadAxis::LeftStick),
            Vec2::new(1.0, 0.0)
        );
        assert_eq!(source.open_gamepads(), &[DeviceId(7)]);

        source.push(RawEvent::GamepadDetached(DeviceId(7)));
        input.poll(&mut source);

        assert!(!input.gamepad_connected(0));
        assert!(!input.gamepad_button_held(0, GamepadButton::A));
        assert_eq!(input.gamepad_axis(0, GamepadAxis::LeftStick), Vec2::ZERO);
        assert_eq!(source.closed_gamepads(), &[DeviceId(7)]);
    }

    #[test]
    fn test_invalid_slots_return_defaults() {
        let input = InputCollector::new(2);
        assert!(!input.gamepad_connected(0));
        assert!(!input.gamepad_connected(usize::MAX));
        assert!(!input.gamepad_button_down(5, GamepadButton::Start));
        assert_eq!(input.gamepad_axis(100, GamepadAxis::Triggers), Vec2::ZERO);
    }

    #[test]
    fn test_events_for_unknown_devices_are_ignored() {
        let mut input = InputCollector::new(2);
        let status = frame(
            &mut input,
            vec![
                RawEvent::GamepadButtonDown {
                    device: DeviceId(3),
                    button: GamepadButton::B,
                },
                RawEvent::GamepadAxisMotion {
                    device: DeviceId(3),
                    axis: RawAxis::TriggerLeft,
                    value: 100,
                },
                RawEvent::GamepadDetached(DeviceId(3)),
            ],
        );
        assert_eq!(status, PollStatus::Continue);
        assert_eq!(input.gamepads().attached_count(), 0);
    }

    #[test]
    fn test_gamepad_buttons_are_per_device() {
        let mut input = InputCollector::new(2);
        frame(
            &mut input,
            vec![
                RawEvent::GamepadAttached(DeviceId(1)),
                RawEvent::GamepadAttached(DeviceId(2)),
                RawEvent::GamepadButtonDown {
                    device: DeviceId(2),
                    button: GamepadButton::X,
                },
            ],
        );
        assert!(!input.gamepad_button_down(0, GamepadButton::X));
        assert!(input.gamepad_button_down(1, GamepadButton::X));

        frame(&mut input, vec![]);
        assert!(!input.gamepad_button_down(1, GamepadButton::X));
        assert!(input.gamepad_button_held(1, GamepadButton::X));

        frame(
            &mut input,
            vec![RawEvent::GamepadButtonUp {
                device: DeviceId(2),
                button: GamepadButton::X,
            }],
        );
        assert!(input.gamepad_button_up(1, GamepadButton::X));
        assert!(!input.gamepad_button_held(1, GamepadButton::X));
        assert!(!input.gamepad_button_up(0, GamepadButton::X));

        frame(&mut input, vec![]);
        assert!(!input.gamepad_button_up(1, GamepadButton::X));
    }

    #[test]
    fn test_duplicate_attach_opens_device_once() {
        let mut input = InputCollector::new(2);
        let mut source = ScriptedEvents::new();
        source.extend([
            RawEvent::KeyDown {
                key: Key::A,
                repeat: true,
            },
            RawEvent::GamepadAttached(DeviceId(1)),
            RawEvent::GamepadAttached(DeviceId(1)),
        ]);
        input.poll(&mut source);

        assert_eq!(source.open_gamepads(), &[DeviceId(1)]);
        assert_eq!(input.gamepads().attached_count(), 1);

        source.push(RawEvent::GamepadDetached(DeviceId(1)));
        input.poll(&mut source);
        assert!(source.open_gamepads().is_empty());
        assert_eq!(source.closed_gamepads(), &[DeviceId(1)]);
    }

    #[test]
    fn test_quit_stops_draining() {
        let mut input = InputCollector::new(2);
        let mut source = ScriptedEvents::new();
        source.extend([
            RawEvent::KeyDown {
                key: Key::A,
                repeat: false,
            },
            RawEvent::Quit,
            RawEvent::KeyDown {
                key: Key::B,
                repeat: false,
            },
        ]);

        assert_eq!(input.poll(&mut source), PollStatus::Quit);
        assert!(input.key_down(Key::A, false));
        assert!(!input.key_down(Key::B, false));
        assert_eq!(source.pending(), 1);
    }
}

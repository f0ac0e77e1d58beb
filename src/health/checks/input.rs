//! Input engine check: replays a short scripted session

use glam::Vec2;

use crate::app::input::{
    DeviceId, GamepadAxis, GamepadButton, InputCollector, Key, PollStatus, RawAxis, RawEvent,
    ScriptedEvents,
};
use crate::health::check::{CheckResult, Findings, SystemCheck};

pub struct InputCheck {
    gamepad_slots: usize,
}

impl InputCheck {
    pub fn new() -> Self {
        Self { gamepad_slots: 4 }
    }
}

impl Default for InputCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for InputCheck {
    fn name(&self) -> &'static str {
        "Input"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Replays key, text and gamepad events through the collector")
    }

    fn check(&self) -> CheckResult {
        let mut input = InputCollector::new(self.gamepad_slots);
        let mut events = ScriptedEvents::new();
        let mut findings = Findings::new();
        let pad = DeviceId(7);

        events.extend([
            RawEvent::KeyDown {
                key: Key::A,
                repeat: false,
            },
            RawEvent::TextInput("ab".into()),
            RawEvent::GamepadAttached(pad),
            RawEvent::GamepadAxisMotion {
                device: pad,
                axis: RawAxis::LeftX,
                value: i16::MIN,
            },
        ]);
        let status = input.poll(&mut events);
        findings.require(status == PollStatus::Continue, "first frame keeps running");
        findings.require(
            input.key_down(Key::A, false) && input.key_held(Key::A),
            "key press is down and held",
        );
        findings.require(input.typed_text() == "a", "text input keeps first character");
        findings.require(input.gamepad_connected(0), "gamepad lands in slot 0");
        findings.require(
            input.gamepad_axis(0, GamepadAxis::LeftStick) == Vec2::new(-1.0, 0.0),
            "stick axis normalized and clamped",
        );

        events.extend([
            RawEvent::KeyDown {
                key: Key::A,
                repeat: true,
            },
            RawEvent::GamepadButtonDown {
                device: pad,
                button: GamepadButton::Start,
            },
        ]);
        input.poll(&mut events);
        findings.require(
            !input.key_down(Key::A, false) && input.key_down(Key::A, true),
            "autorepeat only counts when allowed",
        );
        findings.require(input.typed_text().is_empty(), "typed text cleared per frame");
        findings.require(
            input.gamepad_button_down(0, GamepadButton::Start),
            "gamepad button routed to its slot",
        );

        events.extend([RawEvent::KeyUp(Key::A), RawEvent::GamepadDetached(pad)]);
        input.poll(&mut events);
        findings.require(
            input.key_up(Key::A) && !input.key_held(Key::A),
            "release is up and no longer held",
        );
        findings.require(!input.gamepad_connected(0), "detach frees the slot");
        findings.require(events.closed_gamepads() == [pad], "detached device closed");

        events.extend([
            RawEvent::Quit,
            RawEvent::KeyDown {
                key: Key::B,
                repeat: false,
            },
        ]);
        let status = input.poll(&mut events);
        findings.require(status == PollStatus::Quit, "quit reported");
        findings.require(events.pending() == 1, "events after quit left undrained");

        findings.finish("Edge-triggered state consistent", "Input state mismatch")
    }
}

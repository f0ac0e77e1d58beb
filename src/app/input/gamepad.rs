//! Gamepad identity tracking and player slot assignment

use std::collections::HashMap;

use glam::Vec2;
use tracing::{debug, info, warn};

use super::events::{DeviceId, GamepadAxis, GamepadButton, RawAxis};
use super::state::ButtonSet;

/// State of one attached controller
#[derive(Debug, Clone)]
pub struct Gamepad {
    pub buttons: ButtonSet<GamepadButton>,
    pub left_stick: Vec2,
    pub right_stick: Vec2,
    /// Left trigger in x, right trigger in y
    pub triggers: Vec2,
}

impl Gamepad {
    fn new() -> Self {
        Self {
            buttons: ButtonSet::new(),
            left_stick: Vec2::ZERO,
            right_stick: Vec2::ZERO,
            triggers: Vec2::ZERO,
        }
    }

    pub fn axis(&self, axis: GamepadAxis) -> Vec2 {
        match axis {
            GamepadAxis::LeftStick => self.left_stick,
            GamepadAxis::RightStick => self.right_stick,
            GamepadAxis::Triggers => self.triggers,
        }
    }

    /// Store a normalized reading into the matching axis component
    pub fn set_axis(&mut self, axis: RawAxis, value: f32) {
        match axis {
            RawAxis::LeftX => self.left_stick.x = value,
            RawAxis::LeftY => self.left_stick.y = value,
            RawAxis::RightX => self.right_stick.x = value,
            RawAxis::RightY => self.right_stick.y = value,
            RawAxis::TriggerLeft => self.triggers.x = value,
            RawAxis::TriggerRight => self.triggers.y = value,
        }
    }
}

/// Attached gamepads, addressable by device id and by player slot
///
/// Invariant: a device id appears in at most one slot, and a slot holds at
/// most one device id.
#[derive(Debug, Clone)]
pub struct GamepadRegistry {
    by_device: HashMap<DeviceId, Gamepad>,
    slots: Vec<Option<DeviceId>>,
}

impl GamepadRegistry {
    /// Creates a registry with a fixed number of player slots
    pub fn new(capacity: usize) -> Self {
        Self {
            by_device: HashMap::new(),
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of tracked pads, including ones without a slot
    pub fn attached_count(&self) -> usize {
        self.by_device.len()
    }

    /// Track a newly attached device and give it the lowest free slot
    ///
    /// Returns the assigned slot, or `None` when every slot is taken (the pad
    /// is still tracked, just not addressable by players).
    pub fn attach(&mut self, device: DeviceId) -> Option<usize> {
        if self.contains(device) {
            warn!(device = device.0, "Gamepad attached twice, ignoring");
            return self.slot_of(device);
        }

        self.by_device.insert(device, Gamepad::new());

        let slot = self.slots.iter().position(Option::is_none);
        match slot {
            Some(slot) => {
                self.slots[slot] = Some(device);
                info!(device = device.0, slot, "Gamepad attached");
            }
            None => {
                warn!(
                    device = device.0,
                    capacity = self.capacity(),
                    "Gamepad attached but no player slot is free"
                );
            }
        }
        slot
    }

    /// Forget a device and free its slot. Returns false for unknown devices.
    pub fn detach(&mut self, device: DeviceId) -> bool {
        if self.by_device.remove(&device).is_none() {
            debug!(device = device.0, "Detach for unknown gamepad ignored");
            return false;
        }

        if let Some(slot) = self.slot_of(device) {
            self.slots[slot] = None;
            info!(device = device.0, slot, "Gamepad detached");
        }
        true
    }

    /// True while the device is tracked, with or without a slot
    pub fn contains(&self, device: DeviceId) -> bool {
        self.by_device.contains_key(&device)
    }

    pub fn slot_of(&self, device: DeviceId) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(device))
    }

    pub fn device_mut(&mut self, device: DeviceId) -> Option<&mut Gamepad> {
        self.by_device.get_mut(&device)
    }

    /// Pad assigned to a player slot; out-of-range slots yield `None`
    pub fn by_slot(&self, slot: usize) -> Option<&Gamepad> {
        let device = self.slots.get(slot).copied().flatten()?;
        self.by_device.get(&device)
    }

    pub fn begin_frame(&mut self) {
        for pad in self.by_device.values_mut() {
            pad.buttons.begin_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_fill_lowest_first() {
        let mut pads = GamepadRegistry::new(4);
        assert_eq!(pads.attach(DeviceId(10)), Some(0));
        assert_eq!(pads.attach(DeviceId(11)), Some(1));
        assert_eq!(pads.attach(DeviceId(12)), Some(2));

        assert!(pads.detach(DeviceId(10)));
        assert!(pads.by_slot(0).is_none());
        // Other pads keep their slots
        assert_eq!(pads.slot_of(DeviceId(11)), Some(1));

        // The freed slot is the lowest one, so it is reused first
        assert_eq!(pads.attach(DeviceId(13)), Some(0));
        assert_eq!(pads.attach(DeviceId(14)), Some(3));
    }

    #[test]
    fn test_overflow_pad_is_tracked_without_slot() {
        let mut pads = GamepadRegistry::new(1);
        assert_eq!(pads.attach(DeviceId(1)), Some(0));
        assert_eq!(pads.attach(DeviceId(2)), None);

        assert_eq!(pads.attached_count(), 2);
        assert!(pads.device_mut(DeviceId(2)).is_some());
        assert!(pads.by_slot(1).is_none());

        // A freed slot is not back-filled by an already attached pad
        pads.detach(DeviceId(1));
        assert!(pads.by_slot(0).is_none());
    }

    #[test]
    fn test_detach_unknown_device() {
        let mut pads = GamepadRegistry::new(2);
        assert!(!pads.detach(DeviceId(99)));
        assert!(!pads.contains(DeviceId(99)));
    }

    #[test]
    fn test_duplicate_attach_keeps_slot() {
        let mut pads = GamepadRegistry::new(2);
        pads.attach(DeviceId(5));
        assert!(pads.contains(DeviceId(5)));
        assert_eq!(pads.attach(DeviceId(5)), Some(0));
        assert_eq!(pads.attached_count(), 1);
        assert!(pads.by_slot(1).is_none());
    }

    #[test]
    fn test_axis_components() {
        let mut pad = Gamepad::new();
        pad.set_axis(RawAxis::LeftX, 0.5);
        pad.set_axis(RawAxis::RightY, -0.25);
        pad.set_axis(RawAxis::TriggerRight, 1.0);

        assert_eq!(pad.axis(GamepadAxis::LeftStick), Vec2::new(0.5, 0.0));
        assert_eq!(pad.axis(GamepadAxis::RightStick), Vec2::new(0.0, -0.25));
        assert_eq!(pad.axis(GamepadAxis::Triggers), Vec2::new(0.0, 1.0));
    }
}

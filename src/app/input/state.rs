//! Derived per-frame input state

use std::collections::HashSet;
use std::hash::Hash;

use glam::Vec2;

/// Edge-triggered and level state for a family of buttons
///
/// `down`, `down_autorepeat` and `up` only describe the current frame and are
/// cleared by [`ButtonSet::begin_frame`]. `held` persists until a release.
#[derive(Debug, Clone)]
pub struct ButtonSet<T> {
    down: HashSet<T>,
    down_autorepeat: HashSet<T>,
    held: HashSet<T>,
    up: HashSet<T>,
}

impl<T> Default for ButtonSet<T> {
    fn default() -> Self {
        Self {
            down: HashSet::new(),
            down_autorepeat: HashSet::new(),
            held: HashSet::new(),
            up: HashSet::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> ButtonSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget this frame's transitions; held buttons stay held
    pub fn begin_frame(&mut self) {
        self.down.clear();
        self.down_autorepeat.clear();
        self.up.clear();
    }

    /// Record a press. Repeat signals never count as a fresh press.
    pub fn press(&mut self, button: T, repeat: bool) {
        if repeat {
            self.down_autorepeat.insert(button);
        } else {
            self.down.insert(button);
        }
        self.held.insert(button);
    }

    pub fn release(&mut self, button: T) {
        self.up.insert(button);
        self.held.remove(&button);
    }

    /// Pressed this frame, optionally counting autorepeat signals
    pub fn is_down(&self, button: T, allow_autorepeat: bool) -> bool {
        self.down.contains(&button) || (allow_autorepeat && self.down_autorepeat.contains(&button))
    }

    pub fn is_held(&self, button: T) -> bool {
        self.held.contains(&button)
    }

    pub fn is_up(&self, button: T) -> bool {
        self.up.contains(&button)
    }
}

/// Mouse pointer state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Last known absolute position in pixels
    pub position: Vec2,
    /// Motion reported by the latest motion event this frame
    pub motion: Vec2,
    /// Wheel movement this frame, last event wins
    pub scroll: f32,
}

impl PointerState {
    pub fn begin_frame(&mut self) {
        self.motion = Vec2::ZERO;
        self.scroll = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_then_level() {
        let mut buttons = ButtonSet::new();
        buttons.press('a', false);

        assert!(buttons.is_down('a', false));
        assert!(buttons.is_held('a'));
        assert!(!buttons.is_up('a'));

        buttons.begin_frame();
        assert!(!buttons.is_down('a', false));
        assert!(buttons.is_held('a'));
    }

    #[test]
    fn test_autorepeat_reported_separately() {
        let mut buttons = ButtonSet::new();
        buttons.press('a', false);
        buttons.begin_frame();
        buttons.press('a', true);

        assert!(!buttons.is_down('a', false));
        assert!(buttons.is_down('a', true));
        assert!(buttons.is_held('a'));

        buttons.begin_frame();
        assert!(!buttons.is_down('a', true));
        assert!(buttons.is_held('a'));
    }

    #[test]
    fn test_press_and_release_in_one_frame() {
        let mut buttons = ButtonSet::new();
        buttons.press(1u8, false);
        buttons.release(1u8);

        assert!(buttons.is_down(1, false));
        assert!(buttons.is_up(1));
        assert!(!buttons.is_held(1));

        buttons.begin_frame();
        assert!(!buttons.is_up(1));
    }

    #[test]
    fn test_pointer_begin_frame_keeps_position() {
        let mut pointer = PointerState {
            position: Vec2::new(4.0, 5.0),
            motion: Vec2::new(1.0, 1.0),
            scroll: 3.0,
        };
        pointer.begin_frame();
        assert_eq!(pointer.position, Vec2::new(4.0, 5.0));
        assert_eq!(pointer.motion, Vec2::ZERO);
        assert_eq!(pointer.scroll, 0.0);
    }
}

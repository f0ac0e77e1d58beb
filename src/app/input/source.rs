//! Device event sources

use std::collections::VecDeque;

use super::events::{DeviceId, RawEvent};

/// Supplier of raw device events, drained to exhaustion once per frame
pub trait EventSource {
    /// Next pending event, or `None` once this frame's events are exhausted
    fn poll_event(&mut self) -> Option<RawEvent>;

    /// Open a controller that was just reported as attached
    fn open_gamepad(&mut self, _device: DeviceId) {}

    /// Close a controller that was just reported as detached
    fn close_gamepad(&mut self, _device: DeviceId) {}
}

/// In-memory event queue
///
/// Events pushed for a frame are all returned by the next poll. Opened and
/// closed controllers are remembered so callers can check device lifetimes.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    pending: VecDeque<RawEvent>,
    open: Vec<DeviceId>,
    closed: Vec<DeviceId>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: RawEvent) -> &mut Self {
        self.pending.push_back(event);
        self
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = RawEvent>) -> &mut Self {
        self.pending.extend(events);
        self
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Controllers currently open through this source
    pub fn open_gamepads(&self) -> &[DeviceId] {
        &self.open
    }

    /// Controllers closed through this source, in close order
    pub fn closed_gamepads(&self) -> &[DeviceId] {
        &self.closed
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Option<RawEvent> {
        self.pending.pop_front()
    }

    fn open_gamepad(&mut self, device: DeviceId) {
        self.open.push(device);
    }

    fn close_gamepad(&mut self, device: DeviceId) {
        self.open.retain(|d| *d != device);
        self.closed.push(device);
    }
}

use crate::action::{Action, KeyBindings};
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Keyboard and window-close state accumulated from polled events.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition.
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if self.held.insert(key) {
                tracing::trace!(?key, "key down");
            }
        } else if self.held.remove(&key) {
            tracing::trace!(?key, "key up");
        }
    }

    /// The window system asked for the window to close.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Actions whose keys are currently held, in binding order.
    pub fn active_actions(&self, bindings: &KeyBindings) -> Vec<Action> {
        bindings
            .iter()
            .filter(|(key, _)| self.held.contains(key))
            .map(|&(_, action)| action)
            .collect()
    }

    /// True if the window was asked to close or a close key is held.
    pub fn wants_close(&self, bindings: &KeyBindings) -> bool {
        self.close_requested || self.active_actions(bindings).contains(&Action::Close)
    }
}

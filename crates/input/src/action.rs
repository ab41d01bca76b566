use winit::keyboard::KeyCode;

/// A high-level action produced by held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Ask the frame loop to stop.
    Close,
}

/// Key to action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, Action)>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn bind(mut self, key: KeyCode, action: Action) -> Self {
        self.bindings.push((key, action));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(KeyCode, Action)> {
        self.bindings.iter()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty().bind(KeyCode::Escape, Action::Close)
    }
}

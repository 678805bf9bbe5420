// Key binding configuration and remapping

use super::action::{default_bindings, Control};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps physical keys to controls. Several keys may drive one control;
/// each key drives at most one.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Control>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

impl KeyBindings {
    /// Bind each `(key, control)` pair in order; later pairs win a shared key
    pub fn from_bindings(bindings: Vec<(KeyCode, Control)>) -> Self {
        let mut config = Self {
            bindings: HashMap::new(),
        };
        for (key, control) in bindings {
            config.bind(key, control);
        }
        config
    }

    /// Bind a key, replacing whatever it was bound to before
    pub fn bind(&mut self, key: KeyCode, control: Control) {
        self.bindings.insert(key, control);
    }

    pub fn control_for(&self, key: KeyCode) -> Option<Control> {
        self.bindings.get(&key).copied()
    }
}

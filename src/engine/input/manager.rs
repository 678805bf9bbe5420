// Input manager - turns window key events into control state

use super::action::Control;
use super::config::KeyBindings;
use super::controls::ControlState;
use log::debug;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the key bindings and the control state they drive
#[derive(Debug, Default)]
pub struct InputManager {
    bindings: KeyBindings,
    controls: ControlState,
}

impl InputManager {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            controls: ControlState::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply one key transition. Returns the control it drove, if any.
    pub fn process_key(
        &mut self,
        key: KeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<Control> {
        let control = self.bindings.control_for(key)?;
        match state {
            ElementState::Pressed => {
                if !repeat {
                    debug!("{} pressed", control.name());
                    self.controls.press(control);
                }
            }
            ElementState::Released => {
                self.controls.release(control);
            }
        }
        Some(control)
    }

    /// Call once per frame after the frame's ticks have run
    pub fn end_frame(&mut self) {
        self.controls.end_frame();
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlState {
        &mut self.controls
    }
}

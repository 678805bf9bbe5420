// Control state read by entities each tick

use super::action::Control;
use std::collections::{HashMap, HashSet};

/// State of one control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlKey {
    pub active: bool,
}

/// Snapshot of every control for the current tick.
///
/// Entities only read it. A control that was never pressed has no entry and
/// reads as inactive.
#[derive(Debug, Clone, Default)]
pub struct ControlState {
    keys: HashMap<Control, ControlKey>,

    /// Controls that went from inactive to active since the last `end_frame`
    just_pressed: HashSet<Control>,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a control is currently held
    pub fn is_active(&self, control: Control) -> bool {
        self.keys.get(&control).map(|k| k.active).unwrap_or(false)
    }

    /// Whether a control was pressed since the last frame ended
    pub fn just_pressed(&self, control: Control) -> bool {
        self.just_pressed.contains(&control)
    }

    pub fn press(&mut self, control: Control) {
        let key = self.keys.entry(control).or_default();
        if !key.active {
            key.active = true;
            self.just_pressed.insert(control);
        }
    }

    pub fn release(&mut self, control: Control) {
        if let Some(key) = self.keys.get_mut(&control) {
            key.active = false;
        }
    }

    /// Forget edge-triggered state; held controls stay held
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Release everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        for key in self.keys.values_mut() {
            key.active = false;
        }
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_control_reads_inactive() {
        let state = ControlState::new();
        assert!(!state.is_active(Control::Jump));
        assert_eq!(state.keys.get(&Control::Jump), None);
        assert!(!state.just_pressed(Control::Jump));
    }

    #[test]
    fn test_press_and_release() {
        let mut state = ControlState::new();
        state.press(Control::Right);
        assert!(state.is_active(Control::Right));
        assert!(state.just_pressed(Control::Right));
        assert_eq!(state.keys.get(&Control::Right), Some(&ControlKey { active: true }));

        state.release(Control::Right);
        assert!(!state.is_active(Control::Right));
        assert_eq!(state.keys.get(&Control::Right), Some(&ControlKey { active: false }));
    }

    #[test]
    fn test_end_frame_keeps_held() {
        let mut state = ControlState::new();
        state.press(Control::Left);
        state.end_frame();
        assert!(state.is_active(Control::Left));
        assert!(!state.just_pressed(Control::Left));

        // Pressing a held control again is not a new press
        state.press(Control::Left);
        assert!(!state.just_pressed(Control::Left));
    }

    #[test]
    fn test_release_all() {
        let mut state = ControlState::new();
        state.press(Control::Left);
        state.press(Control::Jump);

        state.release_all();
        assert!(!state.is_active(Control::Left));
        assert!(!state.is_active(Control::Jump));
        assert!(!state.just_pressed(Control::Jump));
    }
}

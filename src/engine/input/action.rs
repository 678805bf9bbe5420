// Named controls and their default keys

use winit::keyboard::KeyCode;

/// Every control the game reads. Entities look these up by name in the
/// control state; the engine handles the meta controls itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    // Movement
    Left,
    Right,
    Jump,

    /// Bound, but no entity reacts to it yet
    Attack,

    // Meta
    ToggleOutlines,
    Pause,
}

impl Control {
    /// Lower-case name, as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Jump => "jump",
            Self::Attack => "attack",
            Self::ToggleOutlines => "toggle_outlines",
            Self::Pause => "pause",
        }
    }
}

/// Default keyboard bindings: arrows or WASD-style, space to jump
pub fn default_bindings() -> Vec<(KeyCode, Control)> {
    vec![
        (KeyCode::ArrowLeft, Control::Left),
        (KeyCode::KeyA, Control::Left),
        (KeyCode::ArrowRight, Control::Right),
        (KeyCode::KeyD, Control::Right),
        (KeyCode::Space, Control::Jump),
        (KeyCode::KeyW, Control::Jump),
        (KeyCode::ArrowUp, Control::Jump),
        (KeyCode::KeyJ, Control::Attack),
        (KeyCode::F1, Control::ToggleOutlines),
        (KeyCode::KeyP, Control::Pause),
    ]
}

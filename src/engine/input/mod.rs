// Input handling
//
// - `action`: the named controls and their default keys
// - `config`: key-to-control bindings and remapping
// - `controls`: per-tick control state (`control -> { active }`) read by entities
// - `manager`: glue between winit key events and the control state
//
// ```rust
// let mut input = InputManager::new(KeyBindings::default());
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Entities see the state through the world context
// if ctx.controls.is_active(Control::Jump) { ... }
//
// // Once per frame, after the ticks ran
// input.end_frame();
// ```

pub mod action;
pub mod config;
pub mod controls;
pub mod manager;

pub use action::Control;
pub use config::KeyBindings;
pub use controls::ControlState;
pub use manager::InputManager;

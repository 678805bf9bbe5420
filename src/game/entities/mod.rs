// Entity system
//
// Everything the engine updates and draws each tick:
// - Entity, the record the engine owns, and EntityKind dispatch
// - Actor state and the hero/puppy behaviours built on it
// - Sprite-sheet animations and tuning tables

pub mod actor;
pub mod animation;
pub mod entity;
pub mod hero;
pub mod puppy;
pub mod state;
pub mod tuning;

use animation::AnimationLabel;
pub use entity::Entity;
pub use tuning::{HeroTuning, PuppyTuning, DEFAULT_GRAVITY, HERO_TUNING, PUPPY_TUNING};

/// Errors raised while building entities
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntityError {
    #[error("{entity} is missing its \"{label}\" animation")]
    MissingAnimation {
        entity: &'static str,
        label: AnimationLabel,
    },

    #[error("Invalid \"{label}\" animation: {reason}")]
    InvalidAnimation {
        label: AnimationLabel,
        reason: &'static str,
    },

    #[error("Gravity must be finite and non-negative, got {0}")]
    InvalidGravity(f32),

    #[error("Position must be finite, got ({x}, {y})")]
    InvalidPosition { x: f32, y: f32 },

    #[error("Invalid {entity} tuning: {reason}")]
    InvalidTuning {
        entity: &'static str,
        reason: &'static str,
    },
}

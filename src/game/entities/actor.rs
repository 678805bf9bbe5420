// Shared record for entities that act: state flags plus an animation table

use super::animation::{Animation, AnimationLabel, AnimationSet};
use super::state::ActorState;
use super::EntityError;
use crate::engine::renderer::Surface;

/// Labels every actor must have an animation for
pub const BASE_ANIMATIONS: [AnimationLabel; 2] = [AnimationLabel::Idle, AnimationLabel::Run];

/// State and animations common to every actor variant.
///
/// Embedded in each variant rather than inherited. The animation table is
/// checked once here so drawing never meets a missing label.
#[derive(Debug, Clone)]
pub struct Actor {
    pub state: ActorState,
    animations: AnimationSet,
    /// Label picked by the most recent draw; `None` before the first draw
    active: Option<AnimationLabel>,
}

impl Actor {
    /// Build an actor, requiring the base animations plus `extra`
    pub fn new(
        entity: &'static str,
        animations: AnimationSet,
        extra: &[AnimationLabel],
    ) -> Result<Self, EntityError> {
        animations.require(entity, &BASE_ANIMATIONS)?;
        animations.require(entity, extra)?;

        Ok(Self {
            state: ActorState::default(),
            animations,
            active: None,
        })
    }

    pub fn active_label(&self) -> Option<AnimationLabel> {
        self.active
    }

    pub fn active_animation(&self) -> Option<&Animation> {
        self.active.and_then(|label| self.animations.get(label))
    }

    /// Record the label chosen for this draw
    pub(crate) fn select(&mut self, label: AnimationLabel) {
        self.active = Some(label);
    }

    /// Draw the active animation's current frame at `(x, y)`
    pub(crate) fn draw_active(&self, surface: &mut dyn Surface, elapsed_ticks: f64, x: f32, y: f32) {
        if let Some(animation) = self.active_animation() {
            animation.draw_frame(elapsed_ticks, surface, x, y, self.state.facing);
        }
    }
}

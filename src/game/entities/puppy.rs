// Autonomous puppy patrolling between two x bounds

use super::actor::Actor;
use super::animation::{Animation, AnimationLabel, AnimationSet};
use super::state::{Facing, MotionMode};
use super::tuning::PuppyTuning;
use super::EntityError;
use crate::engine::assets::ImageHandle;
use crate::engine::renderer::Surface;
use glam::Vec2;
use log::debug;

#[derive(Debug, Clone)]
pub struct Puppy {
    pub actor: Actor,
    tuning: PuppyTuning,
    x_velocity: f32,
}

impl Puppy {
    pub const NAME: &'static str = "puppy";

    pub fn new(sheet: ImageHandle, tuning: PuppyTuning) -> Result<Self, EntityError> {
        let animations = Self::standard_animations(sheet, &tuning)?;
        Self::with_animations(animations, tuning)
    }

    pub fn with_animations(animations: AnimationSet, tuning: PuppyTuning) -> Result<Self, EntityError> {
        tuning.validate()?;
        Ok(Self {
            actor: Actor::new(Self::NAME, animations, &[])?,
            tuning,
            x_velocity: 0.0,
        })
    }

    /// Four-column sheet: idle is the first frame, run cycles all eight
    pub fn standard_animations(sheet: ImageHandle, tuning: &PuppyTuning) -> Result<AnimationSet, EntityError> {
        let size = (tuning.sprite_width, tuning.sprite_height);

        AnimationSet::new()
            .with(
                AnimationLabel::Idle,
                Animation::looping(sheet.clone(), size, 0, 1, 8.0)
                    .with_columns(4)
                    .with_scale(tuning.scale),
            )?
            .with(
                AnimationLabel::Run,
                Animation::looping(sheet, size, 0, 8, 8.0)
                    .with_columns(4)
                    .with_scale(tuning.scale),
            )
    }

    /// Advance one tick. The bound check uses the position before this
    /// tick's move, so the puppy overshoots a bound by at most one step.
    pub fn update(&mut self, position: &mut Vec2) {
        let state = &mut self.actor.state;
        state.running = true;

        if position.x > self.tuning.patrol_max_x {
            if state.facing == Facing::Right {
                debug!("Puppy turning left at x={}", position.x);
            }
            state.facing = Facing::Left;
        } else if position.x < self.tuning.patrol_min_x {
            if state.facing == Facing::Left {
                debug!("Puppy turning right at x={}", position.x);
            }
            state.facing = Facing::Right;
        }

        if state.running {
            self.x_velocity = self.tuning.movement_speed * state.facing.sign();
        }
        position.x += self.x_velocity;
    }

    /// Run while moving; idle only if velocity is ever zero, which only
    /// happens before the first update
    pub fn select_animation(&mut self) -> AnimationLabel {
        let label = match self.actor.state.motion_mode() {
            MotionMode::Running if self.x_velocity != 0.0 => AnimationLabel::Run,
            MotionMode::Running | MotionMode::Idle | MotionMode::Jumping => AnimationLabel::Idle,
        };
        self.actor.select(label);
        label
    }

    pub fn draw(&mut self, surface: &mut dyn Surface, position: Vec2, elapsed_ticks: f64) {
        self.select_animation();
        self.actor.draw_active(surface, elapsed_ticks, position.x, position.y);
    }
}

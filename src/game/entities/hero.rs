// The player-controlled hero

use super::actor::Actor;
use super::animation::{Animation, AnimationLabel, AnimationSet};
use super::state::{Facing, MotionMode};
use super::tuning::HeroTuning;
use super::EntityError;
use crate::engine::assets::ImageHandle;
use crate::engine::input::{Control, ControlState};
use crate::engine::renderer::Surface;
use glam::Vec2;
use log::debug;

/// Input-driven actor: runs left/right and jumps along a fixed arc.
#[derive(Debug, Clone)]
pub struct Hero {
    pub actor: Actor,
    tuning: HeroTuning,
    /// y at the last take-off
    #[allow(dead_code)]
    orig_y: f32,
    /// Current vertical speed while airborne
    jump_speed: f32,
    /// Speed captured at take-off, restored on landing
    orig_jump_speed: f32,
    /// Highest point a jump is nominally allowed to reach, never enforced
    #[allow(dead_code)]
    max_jump_height: f32,
}

impl Hero {
    pub const NAME: &'static str = "hero";

    /// Hero animated from the standard sheet layout
    pub fn new(sheet: ImageHandle, spawn_y: f32, tuning: HeroTuning) -> Result<Self, EntityError> {
        let animations = Self::standard_animations(sheet, &tuning)?;
        Self::with_animations(animations, spawn_y, tuning)
    }

    /// Hero with a caller-supplied animation table (needs idle, run and jump)
    pub fn with_animations(
        animations: AnimationSet,
        spawn_y: f32,
        tuning: HeroTuning,
    ) -> Result<Self, EntityError> {
        tuning.validate()?;
        let actor = Actor::new(Self::NAME, animations, &[AnimationLabel::Jump])?;

        Ok(Self {
            actor,
            orig_y: spawn_y,
            jump_speed: tuning.jump_speed,
            orig_jump_speed: tuning.jump_speed,
            max_jump_height: spawn_y - tuning.max_jump_height,
            tuning,
        })
    }

    /// Idle on row 0 (9 frames), run and jump share row 1 (11 frames)
    pub fn standard_animations(sheet: ImageHandle, tuning: &HeroTuning) -> Result<AnimationSet, EntityError> {
        let size = (tuning.sprite_width, tuning.sprite_height);
        let run = Animation::looping(sheet.clone(), size, 1, 11, 3.0).with_scale(tuning.scale);

        AnimationSet::new()
            .with(
                AnimationLabel::Idle,
                Animation::looping(sheet, size, 0, 9, 3.0).with_scale(tuning.scale),
            )?
            .with(AnimationLabel::Run, run.clone())?
            .with(AnimationLabel::Jump, run)
    }

    /// Advance one tick: input, then horizontal motion, then the jump arc
    pub fn update(&mut self, position: &mut Vec2, gravity: f32, controls: &ControlState) {
        let right = controls.is_active(Control::Right);
        let left = controls.is_active(Control::Left);
        let state = &mut self.actor.state;

        if right {
            state.facing = Facing::Right;
            state.running = true;
        } else if left {
            state.facing = Facing::Left;
            state.running = true;
        }

        if controls.is_active(Control::Jump) && !state.jumping {
            self.orig_y = position.y;
            self.orig_jump_speed = self.jump_speed;
            state.jumping = true;
            debug!("Hero jump from y={}", position.y);
        }

        if !(right || left) && state.running {
            state.running = false;
        }

        if state.running {
            position.x += self.tuning.movement_speed * state.facing.sign();
        }

        if state.jumping {
            position.y += self.jump_speed * self.tuning.jump_time_scale;
            self.jump_speed += gravity * self.tuning.jump_time_scale;

            if position.y > self.tuning.ground_y {
                position.y = self.tuning.ground_y;
                self.jump_speed = self.orig_jump_speed;
                state.jumping = false;
            }
        }
    }

    /// Pick this draw's animation.
    ///
    /// Run is only chosen once some animation has already been drawn, so the
    /// very first draw while running shows idle.
    pub fn select_animation(&mut self) -> AnimationLabel {
        let label = match self.actor.state.motion_mode() {
            MotionMode::Running if self.actor.active_label().is_none() => AnimationLabel::Idle,
            mode => mode.animation_label(),
        };
        self.actor.select(label);
        label
    }

    pub fn draw(&mut self, surface: &mut dyn Surface, position: Vec2, elapsed_ticks: f64) {
        self.select_animation();
        self.actor.draw_active(surface, elapsed_ticks, position.x, position.y);
    }

    /// Centre of the debug outline: middle of the sprite box
    pub fn outline_center(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x + self.tuning.sprite_width as f32 / 2.0,
            position.y + (self.tuning.sprite_height as f32 * self.tuning.scale) / 2.0,
        )
    }
}

// Actor behavioural state

use super::animation::AnimationLabel;

/// Horizontal facing, independent of motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// +1 for right, -1 for left
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// The single, mutually exclusive motion an actor is shown doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionMode {
    Idle,
    Running,
    Jumping,
}

impl MotionMode {
    pub fn animation_label(&self) -> AnimationLabel {
        match self {
            Self::Idle => AnimationLabel::Idle,
            Self::Running => AnimationLabel::Run,
            Self::Jumping => AnimationLabel::Jump,
        }
    }
}

/// Flags an actor's update mutates each tick.
///
/// `running` and `jumping` are independent (an actor can run mid-air);
/// [`ActorState::motion_mode`] collapses them into one mode for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActorState {
    pub running: bool,
    pub jumping: bool,
    /// Declared for the hero but never set by any update and never drawn
    #[allow(dead_code)]
    pub sword_attack: bool,
    pub facing: Facing,
}

impl ActorState {
    /// Jumping wins over running, running over idle
    pub fn motion_mode(&self) -> MotionMode {
        if self.jumping {
            MotionMode::Jumping
        } else if self.running {
            MotionMode::Running
        } else {
            MotionMode::Idle
        }
    }
}

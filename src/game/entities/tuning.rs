// Per-variant tuning tables
//
// Distances are world units (pixels at scale 1), times are ticks.

use super::EntityError;

/// Hero movement, jump and sprite settings
#[derive(Debug, Clone, PartialEq)]
pub struct HeroTuning {
    /// Horizontal distance per tick while running
    pub movement_speed: f32,
    /// Vertical speed at take-off (negative is up)
    pub jump_speed: f32,
    /// Multiplier applied to jump speed and gravity every tick
    pub jump_time_scale: f32,
    /// Nominal jump height above the take-off point
    pub max_jump_height: f32,
    /// Landing threshold: a jump ends once y passes below this
    pub ground_y: f32,

    // Sprite sheet
    pub sprite_width: u32,
    pub sprite_height: u32,
    pub scale: f32,

    /// Debug outline radius (0 disables)
    pub outline_radius: f32,
}

pub const HERO_TUNING: HeroTuning = HeroTuning {
    movement_speed: 8.0,
    jump_speed: -10.0,
    jump_time_scale: 2.0,
    max_jump_height: 200.0,
    ground_y: 500.0,

    sprite_width: 50,
    sprite_height: 50,
    scale: 3.0,

    outline_radius: 75.0,
};

impl Default for HeroTuning {
    fn default() -> Self {
        HERO_TUNING
    }
}

impl HeroTuning {
    /// Reject values that would turn the hero's position non-finite
    pub fn validate(&self) -> Result<(), EntityError> {
        let invalid = |reason| Err(EntityError::InvalidTuning { entity: "hero", reason });

        if !self.movement_speed.is_finite() {
            return invalid("movement speed must be finite");
        }
        if !self.jump_speed.is_finite() {
            return invalid("jump speed must be finite");
        }
        if !self.jump_time_scale.is_finite() {
            return invalid("jump time scale must be finite");
        }
        if !self.max_jump_height.is_finite() {
            return invalid("max jump height must be finite");
        }
        if !self.ground_y.is_finite() {
            return invalid("ground y must be finite");
        }
        check_sprite(&SpriteTuning {
            entity: "hero",
            width: self.sprite_width,
            height: self.sprite_height,
            scale: self.scale,
            outline_radius: self.outline_radius,
        })
    }
}

/// Puppy patrol and sprite settings
#[derive(Debug, Clone, PartialEq)]
pub struct PuppyTuning {
    pub movement_speed: f32,
    /// Turn right once x drops below this
    pub patrol_min_x: f32,
    /// Turn left once x rises above this
    pub patrol_max_x: f32,

    pub sprite_width: u32,
    pub sprite_height: u32,
    pub scale: f32,

    pub outline_radius: f32,
}

pub const PUPPY_TUNING: PuppyTuning = PuppyTuning {
    movement_speed: 8.0,
    patrol_min_x: -100.0,
    patrol_max_x: 1100.0,

    sprite_width: 100,
    sprite_height: 100,
    scale: 1.5,

    outline_radius: 75.0,
};

impl Default for PuppyTuning {
    fn default() -> Self {
        PUPPY_TUNING
    }
}

impl PuppyTuning {
    /// Reject values that would break the patrol or the sprite
    pub fn validate(&self) -> Result<(), EntityError> {
        let invalid = |reason| Err(EntityError::InvalidTuning { entity: "puppy", reason });

        if !self.movement_speed.is_finite() {
            return invalid("movement speed must be finite");
        }
        if !(self.patrol_min_x.is_finite() && self.patrol_max_x.is_finite()) {
            return invalid("patrol bounds must be finite");
        }
        if self.patrol_min_x >= self.patrol_max_x {
            return invalid("patrol min x must be below patrol max x");
        }
        check_sprite(&SpriteTuning {
            entity: "puppy",
            width: self.sprite_width,
            height: self.sprite_height,
            scale: self.scale,
            outline_radius: self.outline_radius,
        })
    }
}

/// Sprite fields both tuning tables share
struct SpriteTuning {
    entity: &'static str,
    width: u32,
    height: u32,
    scale: f32,
    outline_radius: f32,
}

fn check_sprite(sprite: &SpriteTuning) -> Result<(), EntityError> {
    let reason = if sprite.width == 0 || sprite.height == 0 {
        "sprite size must be non-zero"
    } else if !sprite.scale.is_finite() || sprite.scale <= 0.0 {
        "scale must be finite and positive"
    } else if !sprite.outline_radius.is_finite() {
        "outline radius must be finite"
    } else {
        return Ok(());
    };
    Err(EntityError::InvalidTuning {
        entity: sprite.entity,
        reason,
    })
}

/// Gravity applied to every entity unless overridden
pub const DEFAULT_GRAVITY: f32 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_defaults() {
        let tuning = HeroTuning::default();
        assert_eq!(tuning.movement_speed, 8.0);
        assert_eq!(tuning.jump_speed, -10.0);
        assert_eq!(tuning.ground_y, 500.0);
        assert!(tuning.jump_speed < 0.0, "take-off must move upward in y-down space");
    }

    #[test]
    fn test_puppy_bounds_ordered() {
        let tuning = PuppyTuning::default();
        assert!(tuning.patrol_min_x < tuning.patrol_max_x);
        assert_eq!(tuning.movement_speed, 8.0);
    }

    #[test]
    fn test_defaults_validate() {
        assert_eq!(HERO_TUNING.validate(), Ok(()));
        assert_eq!(PUPPY_TUNING.validate(), Ok(()));
    }

    fn hero_reason(tuning: HeroTuning) -> &'static str {
        match tuning.validate() {
            Err(EntityError::InvalidTuning { entity: "hero", reason }) => reason,
            other => panic!("expected hero tuning error, got {:?}", other),
        }
    }

    fn puppy_reason(tuning: PuppyTuning) -> &'static str {
        match tuning.validate() {
            Err(EntityError::InvalidTuning { entity: "puppy", reason }) => reason,
            other => panic!("expected puppy tuning error, got {:?}", other),
        }
    }

    #[test]
    fn test_hero_rejects_non_finite_movement_speed() {
        let tuning = HeroTuning {
            movement_speed: f32::INFINITY,
            ..HERO_TUNING
        };
        assert_eq!(hero_reason(tuning), "movement speed must be finite");
    }

    #[test]
    fn test_hero_rejects_non_finite_jump_speed() {
        let tuning = HeroTuning {
            jump_speed: f32::NAN,
            ..HERO_TUNING
        };
        assert_eq!(hero_reason(tuning), "jump speed must be finite");
    }

    #[test]
    fn test_hero_rejects_non_finite_jump_time_scale() {
        let tuning = HeroTuning {
            jump_time_scale: f32::NAN,
            ..HERO_TUNING
        };
        assert_eq!(hero_reason(tuning), "jump time scale must be finite");
    }

    #[test]
    fn test_hero_rejects_non_finite_max_jump_height() {
        let tuning = HeroTuning {
            max_jump_height: f32::NEG_INFINITY,
            ..HERO_TUNING
        };
        assert_eq!(hero_reason(tuning), "max jump height must be finite");
    }

    #[test]
    fn test_hero_rejects_non_finite_ground() {
        let tuning = HeroTuning {
            ground_y: f32::NAN,
            ..HERO_TUNING
        };
        assert_eq!(hero_reason(tuning), "ground y must be finite");
    }

    #[test]
    fn test_hero_rejects_bad_sprite() {
        let zero = HeroTuning {
            sprite_width: 0,
            ..HERO_TUNING
        };
        assert_eq!(hero_reason(zero), "sprite size must be non-zero");

        for scale in [0.0, -3.0, f32::NAN] {
            let tuning = HeroTuning { scale, ..HERO_TUNING };
            assert_eq!(hero_reason(tuning), "scale must be finite and positive");
        }

        let radius = HeroTuning {
            outline_radius: f32::INFINITY,
            ..HERO_TUNING
        };
        assert_eq!(hero_reason(radius), "outline radius must be finite");
    }

    #[test]
    fn test_puppy_rejects_non_finite_movement_speed() {
        let tuning = PuppyTuning {
            movement_speed: f32::NAN,
            ..PUPPY_TUNING
        };
        assert_eq!(puppy_reason(tuning), "movement speed must be finite");
    }

    #[test]
    fn test_puppy_rejects_non_finite_bounds() {
        let tuning = PuppyTuning {
            patrol_max_x: f32::INFINITY,
            ..PUPPY_TUNING
        };
        assert_eq!(puppy_reason(tuning), "patrol bounds must be finite");
    }

    #[test]
    fn test_puppy_rejects_unordered_bounds() {
        for (min, max) in [(500.0, 500.0), (1100.0, -100.0)] {
            let tuning = PuppyTuning {
                patrol_min_x: min,
                patrol_max_x: max,
                ..PUPPY_TUNING
            };
            assert_eq!(puppy_reason(tuning), "patrol min x must be below patrol max x");
        }
    }

    #[test]
    fn test_puppy_rejects_zero_sprite_height() {
        let tuning = PuppyTuning {
            sprite_height: 0,
            ..PUPPY_TUNING
        };
        assert_eq!(puppy_reason(tuning), "sprite size must be non-zero");
    }
}

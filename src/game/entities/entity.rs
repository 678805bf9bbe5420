// World entities and per-variant dispatch

use super::hero::Hero;
use super::puppy::Puppy;
use super::tuning::{HeroTuning, PuppyTuning, DEFAULT_GRAVITY};
use super::EntityError;
use crate::engine::assets::ImageHandle;
use crate::engine::renderer::{Surface, OUTLINE_COLOR};
use crate::engine::world::WorldContext;
use glam::Vec2;

/// The concrete behaviour an entity runs each tick
#[derive(Debug, Clone)]
pub enum EntityKind {
    Hero(Hero),
    Puppy(Puppy),
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hero(_) => Hero::NAME,
            Self::Puppy(_) => Puppy::NAME,
        }
    }
}

/// Anything the engine updates and draws once per tick
#[derive(Debug, Clone)]
pub struct Entity {
    /// Top-left of the sprite box, y grows downward
    position: Vec2,
    /// Shared with the asset manager; entities without one draw only their outline
    sprite: Option<ImageHandle>,
    pending_removal: bool,
    gravity: f32,
    /// Debug outline radius, 0 disables it
    outline_radius: f32,
    kind: EntityKind,
}

impl Entity {
    pub fn new(
        position: Vec2,
        sprite: Option<ImageHandle>,
        outline_radius: f32,
        kind: EntityKind,
    ) -> Result<Self, EntityError> {
        if !position.is_finite() {
            return Err(EntityError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }

        Ok(Self {
            position,
            sprite,
            pending_removal: false,
            gravity: DEFAULT_GRAVITY,
            outline_radius: outline_radius.max(0.0),
            kind,
        })
    }

    /// Hero at `(x, y)`; `y` also becomes its first take-off height
    pub fn hero(x: f32, y: f32, sheet: ImageHandle, tuning: HeroTuning) -> Result<Self, EntityError> {
        let outline_radius = tuning.outline_radius;
        let hero = Hero::new(sheet.clone(), y, tuning)?;
        Self::new(Vec2::new(x, y), Some(sheet), outline_radius, EntityKind::Hero(hero))
    }

    pub fn puppy(x: f32, y: f32, sheet: ImageHandle, tuning: PuppyTuning) -> Result<Self, EntityError> {
        let outline_radius = tuning.outline_radius;
        let puppy = Puppy::new(sheet.clone(), tuning)?;
        Self::new(Vec2::new(x, y), Some(sheet), outline_radius, EntityKind::Puppy(puppy))
    }

    pub fn with_gravity(mut self, gravity: f32) -> Result<Self, EntityError> {
        if !(gravity.is_finite() && gravity >= 0.0) {
            return Err(EntityError::InvalidGravity(gravity));
        }
        self.gravity = gravity;
        Ok(self)
    }

    /// Advance one tick
    pub fn update(&mut self, ctx: &WorldContext) {
        match &mut self.kind {
            EntityKind::Hero(hero) => hero.update(&mut self.position, self.gravity, ctx.controls),
            EntityKind::Puppy(puppy) => puppy.update(&mut self.position),
        }
        debug_assert!(self.position.is_finite(), "{} left finite space", self.name());
    }

    /// Draw the outline (when enabled) and then the current animation frame
    pub fn draw(&mut self, surface: &mut dyn Surface, ctx: &WorldContext) {
        if ctx.show_outlines && self.outline_radius > 0.0 {
            let center = self.outline_center();
            surface.stroke_circle(center.x, center.y, self.outline_radius, OUTLINE_COLOR);
        }

        if self.sprite.is_none() {
            return;
        }

        match &mut self.kind {
            EntityKind::Hero(hero) => hero.draw(surface, self.position, ctx.elapsed_ticks),
            EntityKind::Puppy(puppy) => puppy.draw(surface, self.position, ctx.elapsed_ticks),
        }
    }

    fn outline_center(&self) -> Vec2 {
        match &self.kind {
            EntityKind::Hero(hero) => hero.outline_center(self.position),
            EntityKind::Puppy(_) => self.position,
        }
    }

    /// Ask the engine to drop this entity at the end of the current tick
    #[allow(dead_code)]
    pub fn mark_for_removal(&mut self) {
        self.pending_removal = true;
    }

    pub fn is_pending_removal(&self) -> bool {
        self.pending_removal
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::{Control, ControlState};
    use crate::engine::renderer::recorder::{DrawCall, RecordingSurface};
    use image::RgbaImage;

    fn hero_sheet() -> ImageHandle {
        ImageHandle::from_image("hero", RgbaImage::new(550, 100))
    }

    fn puppy_sheet() -> ImageHandle {
        ImageHandle::from_image("puppy", RgbaImage::new(400, 200))
    }

    fn ctx(controls: &ControlState, show_outlines: bool) -> WorldContext<'_> {
        WorldContext {
            controls,
            show_outlines,
            elapsed_ticks: 0.0,
        }
    }

    #[test]
    fn test_defaults() {
        let entity = Entity::puppy(200.0, 200.0, puppy_sheet(), PuppyTuning::default()).unwrap();
        assert_eq!(entity.gravity, 0.5);
        assert!(!entity.is_pending_removal());
        assert_eq!(entity.outline_radius, 75.0);
        assert!(matches!(entity.kind, EntityKind::Puppy(_)));
        assert_eq!(entity.name(), "puppy");
    }

    #[test]
    fn test_rejects_bad_gravity() {
        let entity = Entity::puppy(0.0, 0.0, puppy_sheet(), PuppyTuning::default()).unwrap();
        let err = entity.clone().with_gravity(-1.0).unwrap_err();
        assert_eq!(err, EntityError::InvalidGravity(-1.0));

        let heavier = entity.with_gravity(1.0).unwrap();
        assert_eq!(heavier.gravity, 1.0);
    }

    #[test]
    fn test_rejects_nan_jump_time_scale() {
        let tuning = HeroTuning {
            jump_time_scale: f32::NAN,
            ..HeroTuning::default()
        };
        let err = Entity::hero(200.0, 500.0, hero_sheet(), tuning).unwrap_err();
        assert!(matches!(err, EntityError::InvalidTuning { entity: "hero", .. }));
    }

    #[test]
    fn test_rejects_non_finite_ground() {
        let tuning = HeroTuning {
            ground_y: f32::INFINITY,
            ..HeroTuning::default()
        };
        assert!(Entity::hero(200.0, 500.0, hero_sheet(), tuning).is_err());
    }

    #[test]
    fn test_rejects_non_finite_position() {
        let err = Entity::hero(f32::NAN, 500.0, hero_sheet(), HeroTuning::default()).unwrap_err();
        assert!(matches!(err, EntityError::InvalidPosition { .. }));
    }

    #[test]
    fn test_update_dispatches_to_hero() {
        let mut entity = Entity::hero(200.0, 500.0, hero_sheet(), HeroTuning::default()).unwrap();
        let mut controls = ControlState::new();
        controls.press(Control::Right);
        entity.update(&ctx(&controls, false));

        assert_eq!(entity.position(), Vec2::new(208.0, 500.0));
    }

    #[test]
    fn test_outline_only_when_enabled() {
        let controls = ControlState::new();
        let mut entity = Entity::hero(200.0, 500.0, hero_sheet(), HeroTuning::default()).unwrap();

        let mut surface = RecordingSurface::new();
        entity.draw(&mut surface, &ctx(&controls, false));
        assert!(surface.circles().is_empty());
        assert_eq!(surface.images().len(), 1);

        let mut surface = RecordingSurface::new();
        entity.draw(&mut surface, &ctx(&controls, true));
        assert_eq!(
            surface.calls[0],
            DrawCall::Circle {
                center_x: 225.0,
                center_y: 575.0,
                radius: 75.0,
                color: OUTLINE_COLOR,
            }
        );
        assert_eq!(surface.images().len(), 1);
    }

    #[test]
    fn test_puppy_outline_at_position() {
        let controls = ControlState::new();
        let mut entity = Entity::puppy(200.0, 200.0, puppy_sheet(), PuppyTuning::default()).unwrap();
        let mut surface = RecordingSurface::new();
        entity.draw(&mut surface, &ctx(&controls, true));

        match surface.calls[0] {
            DrawCall::Circle { center_x, center_y, .. } => {
                assert_eq!((center_x, center_y), (200.0, 200.0));
            }
            ref other => panic!("expected outline first, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_radius_disables_outline() {
        let controls = ControlState::new();
        let tuning = PuppyTuning {
            outline_radius: 0.0,
            ..PuppyTuning::default()
        };
        let mut entity = Entity::puppy(0.0, 0.0, puppy_sheet(), tuning).unwrap();
        let mut surface = RecordingSurface::new();
        entity.draw(&mut surface, &ctx(&controls, true));
        assert!(surface.circles().is_empty());
    }

    #[test]
    fn test_no_sprite_draws_nothing_but_outline() {
        let controls = ControlState::new();
        let mut entity = Entity::puppy(0.0, 0.0, puppy_sheet(), PuppyTuning::default()).unwrap();
        entity.sprite = None;

        let mut surface = RecordingSurface::new();
        entity.draw(&mut surface, &ctx(&controls, false));
        assert!(surface.calls.is_empty());

        entity.draw(&mut surface, &ctx(&controls, true));
        assert_eq!(surface.calls.len(), 1);
        assert_eq!(surface.circles().len(), 1);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut controls = ControlState::new();
        controls.press(Control::Left);
        let mut entity = Entity::hero(300.0, 500.0, hero_sheet(), HeroTuning::default()).unwrap();
        entity.update(&ctx(&controls, false));
        // Settle past the first-draw selection
        entity.draw(&mut RecordingSurface::new(), &ctx(&controls, false));

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        entity.draw(&mut first, &ctx(&controls, true));
        entity.draw(&mut second, &ctx(&controls, true));

        assert_eq!(first.calls, second.calls);
        assert_eq!(entity.position(), Vec2::new(292.0, 500.0));
    }

    #[test]
    fn test_mark_for_removal() {
        let mut entity = Entity::puppy(0.0, 0.0, puppy_sheet(), PuppyTuning::default()).unwrap();
        entity.mark_for_removal();
        assert!(entity.is_pending_removal());
    }
}

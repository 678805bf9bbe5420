// The game engine: owns every entity and runs update, draw and sweep each tick

use crate::core::math::Rect;
use crate::engine::assets::ImageHandle;
use crate::engine::input::ControlState;
use crate::engine::renderer::Surface;
use crate::game::entities::Entity;
use log::{debug, info};

/// Read-only view of the world handed to entities for one update or draw
#[derive(Debug, Clone, Copy)]
pub struct WorldContext<'a> {
    pub controls: &'a ControlState,
    pub show_outlines: bool,
    /// Ticks since the engine started, drives animation frames
    pub elapsed_ticks: f64,
}

/// Entity collection plus the shared state entities read each tick
#[derive(Debug, Default)]
pub struct GameEngine {
    entities: Vec<Entity>,
    background: Option<ImageHandle>,
    controls: ControlState,
    show_outlines: bool,
    tick_count: u64,
}

impl GameEngine {
    pub fn new(background: Option<ImageHandle>) -> Self {
        Self {
            background,
            ..Self::default()
        }
    }

    /// Entities update and draw in insertion order
    pub fn add_entity(&mut self, entity: Entity) {
        info!(
            "Added {} at ({}, {})",
            entity.name(),
            entity.position().x,
            entity.position().y
        );
        self.entities.push(entity);
    }

    /// Update every entity once, flagged or not
    pub fn update(&mut self) {
        let ctx = WorldContext {
            controls: &self.controls,
            show_outlines: self.show_outlines,
            elapsed_ticks: self.tick_count as f64,
        };
        for entity in &mut self.entities {
            entity.update(&ctx);
        }
    }

    /// Draw the background and then every entity in insertion order
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        if let Some(background) = &self.background {
            let src = Rect::new(0.0, 0.0, background.width() as f32, background.height() as f32);
            surface.draw_image_region(background, src, 0.0, 0.0, 1.0, false);
        }

        let ctx = WorldContext {
            controls: &self.controls,
            show_outlines: self.show_outlines,
            elapsed_ticks: self.tick_count as f64,
        };
        for entity in &mut self.entities {
            entity.draw(surface, &ctx);
        }
    }

    /// Drop every entity flagged for removal. Returns how many went.
    pub fn sweep(&mut self) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| !e.is_pending_removal());
        let removed = before - self.entities.len();
        if removed > 0 {
            debug!("Removed {} entities", removed);
        }
        removed
    }

    /// One full tick: update all, then draw all, then sweep
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        self.update();
        self.draw(surface);
        self.sweep();
        self.tick_count += 1;
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Replace the control snapshot entities will read next tick
    pub fn sync_controls(&mut self, controls: &ControlState) {
        self.controls.clone_from(controls);
    }

    pub fn set_show_outlines(&mut self, show: bool) {
        self.show_outlines = show;
    }

    pub fn toggle_outlines(&mut self) {
        self.show_outlines = !self.show_outlines;
        info!("Outlines {}", if self.show_outlines { "on" } else { "off" });
    }
}

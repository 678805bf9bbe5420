use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use log::{error, info, warn};
use std::sync::Arc;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::assets::{AssetManager, BACKGROUND, DEFAULT_ASSETS, HERO_SHEET, PUPPY_SHEET};
use engine::input::{Control, InputManager, KeyBindings};
use engine::renderer::{Framebuffer, Presenter};
use engine::{EngineConfig, GameEngine, GameLoop};
use game::entities::{Entity, HeroTuning, PuppyTuning, HERO_TUNING, PUPPY_TUNING};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Pup Runner...");

    let config = EngineConfig::from_env();
    let assets = load_assets(&config)?;
    let mut engine = build_world(&assets, &config)?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Pup Runner")
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut presenter = pollster::block_on(Presenter::new(window.clone(), config.width, config.height))?;
    let mut frame = Framebuffer::new(config.width, config.height);
    let mut input = InputManager::new(KeyBindings::default());
    let mut clock = GameLoop::new(config.tick_rate);

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(
                    "Close requested after {} ticks over {} frames, shutting down...",
                    clock.tick_count(),
                    clock.frame_count()
                );
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                presenter.resize(physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.controls_mut().release_all();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if let Err(e) = presenter.present(&frame) {
                    error!("Present failed: {:#}", e);
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                if input.controls().just_pressed(Control::Pause) {
                    clock.toggle_pause();
                }
                if input.controls().just_pressed(Control::ToggleOutlines) {
                    engine.toggle_outlines();
                }

                let ticks = clock.begin_frame();
                if ticks > 0 {
                    engine.sync_controls(input.controls());
                    for _ in 0..ticks {
                        frame.clear();
                        engine.tick(&mut frame);
                    }
                }
                input.end_frame();

                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Load the default images, standing in flat placeholders for any that fail
fn load_assets(config: &EngineConfig) -> Result<AssetManager> {
    let mut assets = AssetManager::new(&config.asset_root);
    assets.queue_all(DEFAULT_ASSETS.iter().copied());

    let report = assets.load_all();
    if !report.is_complete() {
        warn!(
            "{} of {} assets failed to load from {}, using placeholders",
            report.failed.len(),
            DEFAULT_ASSETS.len(),
            config.asset_root.display()
        );
        for path in &report.failed {
            let placeholder = placeholder_for(path, config);
            assets
                .insert(path, placeholder)
                .with_context(|| format!("inserting placeholder for {}", path))?;
        }
    }

    Ok(assets)
}

/// Flat image sized like the sheet it replaces
fn placeholder_for(path: &str, config: &EngineConfig) -> RgbaImage {
    match path {
        HERO_SHEET => RgbaImage::from_pixel(
            HERO_TUNING.sprite_width * 11,
            HERO_TUNING.sprite_height * 2,
            Rgba([200, 60, 60, 255]),
        ),
        PUPPY_SHEET => RgbaImage::from_pixel(
            PUPPY_TUNING.sprite_width * 4,
            PUPPY_TUNING.sprite_height * 2,
            Rgba([170, 120, 60, 255]),
        ),
        _ => RgbaImage::from_pixel(config.width, config.height, Rgba([40, 44, 52, 255])),
    }
}

/// Background, a hero on the ground and a puppy patrolling above it
fn build_world(assets: &AssetManager, config: &EngineConfig) -> Result<GameEngine> {
    let background = assets.get_asset(BACKGROUND)?;
    let mut engine = GameEngine::new(Some(background));
    engine.set_show_outlines(config.show_outlines);

    let hero = Entity::hero(200.0, 500.0, assets.get_asset(HERO_SHEET)?, HeroTuning::default())?;
    let puppy = Entity::puppy(200.0, 200.0, assets.get_asset(PUPPY_SHEET)?, PuppyTuning::default())?;
    engine.add_entity(hero.with_gravity(config.gravity)?);
    engine.add_entity(puppy.with_gravity(config.gravity)?);

    info!("World ready with {} entities", engine.entity_count());
    Ok(engine)
}

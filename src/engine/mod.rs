// Engine modules: assets, clock, input, rendering and the entity world

pub mod assets;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod world;

pub use config::EngineConfig;
pub use game_loop::GameLoop;
pub use world::GameEngine;

// Engine configuration

use super::game_loop::DEFAULT_TICK_RATE;
use crate::game::entities::DEFAULT_GRAVITY;
use std::path::PathBuf;

/// Environment variable overriding the asset root
pub const ASSET_ROOT_ENV: &str = "ASSET_ROOT";

/// Window, clock and debug settings for one run of the game
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Framebuffer and initial window size, in pixels
    pub width: u32,
    pub height: u32,
    /// Ticks per second
    pub tick_rate: u32,
    /// Directory the asset paths are relative to
    pub asset_root: PathBuf,
    /// Draw entity outlines
    pub show_outlines: bool,
    /// Downward acceleration per tick for entities that fall
    pub gravity: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            tick_rate: DEFAULT_TICK_RATE,
            asset_root: PathBuf::from("."),
            show_outlines: false,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl EngineConfig {
    /// Defaults, with the asset root taken from `ASSET_ROOT` when set
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var_os(ASSET_ROOT_ENV) {
            Some(root) if !root.is_empty() => config.with_asset_root(root),
            _ => config,
        }
    }

    pub fn with_asset_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.asset_root = root.into();
        self
    }
}

// Asset management system
//
// Preloads every image the game needs, then hands out cheap shared handles.

mod handle;
mod loader;
mod manager;

pub use handle::{AssetId, ImageHandle};
pub use loader::AssetLoader;
pub use manager::AssetManager;

/// Images the game needs before any entity is built
pub const HERO_SHEET: &str = "img/ZXe.png";
pub const PUPPY_SHEET: &str = "img/puppy.png";
pub const BACKGROUND: &str = "img/bg.png";

pub const DEFAULT_ASSETS: &[&str] = &[HERO_SHEET, PUPPY_SHEET, BACKGROUND];

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset already loaded: {0}")]
    AlreadyLoaded(String),

    #[error("Failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

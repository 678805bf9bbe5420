// Asset file resolution and image decoding

use super::AssetError;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// File extensions the loader is willing to decode
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Asset loader responsible for finding and decoding image files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader rooted at the given directory
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset, e.g. `img/puppy.png`
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Check whether the name carries an extension we can decode
    pub fn is_supported(name: &str) -> bool {
        Path::new(name)
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_ascii_lowercase();
                IMAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// Read and decode an image into RGBA8
    pub fn load_image(&self, name: &str) -> Result<RgbaImage, AssetError> {
        let path = self.resolve_path(name);

        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        let bytes = std::fs::read(&path)?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })?;

        Ok(decoded.to_rgba8())
    }
}

// Central asset management: preload everything, then hand out handles

use super::{AssetError, AssetId, AssetLoader, ImageHandle};
use image::RgbaImage;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Outcome of a bulk load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub failed: Vec<String>,
}

impl LoadReport {
    /// True when every queued asset decoded
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Owns every decoded image.
///
/// Paths are queued first and decoded together by [`AssetManager::load_all`];
/// by the time entities are built every handle they ask for is ready to draw.
pub struct AssetManager {
    loader: AssetLoader,

    /// Paths waiting for the next bulk load, in queue order
    queued: Vec<String>,

    /// Decoded images
    images: HashMap<AssetId, Arc<RgbaImage>>,

    /// Path to ID mapping
    paths: HashMap<String, AssetId>,
}

impl AssetManager {
    /// Create a new asset manager rooted at `asset_path`
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            queued: Vec::new(),
            images: HashMap::new(),
            paths: HashMap::new(),
        }
    }

    /// Queue a path for the next bulk load. Already-loaded or queued paths are ignored.
    pub fn queue(&mut self, path: &str) {
        if self.paths.contains_key(path) || self.queued.iter().any(|p| p == path) {
            return;
        }
        if !AssetLoader::is_supported(path) {
            warn!("Queued {} without a known image extension", path);
        }
        self.queued.push(path.to_string());
    }

    /// Queue several paths at once
    pub fn queue_all<'a, I: IntoIterator<Item = &'a str>>(&mut self, paths: I) {
        for path in paths {
            self.queue(path);
        }
    }

    /// Decode every queued image. Failures are logged and reported, not fatal here;
    /// the caller decides whether a partial load is acceptable.
    pub fn load_all(&mut self) -> LoadReport {
        let mut report = LoadReport::default();

        for path in std::mem::take(&mut self.queued) {
            match self.loader.load_image(&path) {
                Ok(image) => {
                    self.store(&path, image);
                    report.loaded += 1;
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", path, e);
                    report.failed.push(path);
                }
            }
        }

        info!(
            "Asset load finished: {} loaded, {} failed",
            report.loaded,
            report.failed.len()
        );
        report
    }

    /// Register an image generated in memory under `path`
    pub fn insert(&mut self, path: &str, image: RgbaImage) -> Result<ImageHandle, AssetError> {
        if self.paths.contains_key(path) {
            return Err(AssetError::AlreadyLoaded(path.to_string()));
        }
        Ok(self.store(path, image))
    }

    /// Handle to a loaded image
    pub fn get_asset(&self, path: &str) -> Result<ImageHandle, AssetError> {
        let id = self
            .paths
            .get(path)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;
        let image = self
            .images
            .get(id)
            .ok_or_else(|| AssetError::NotFound(path.to_string()))?;
        Ok(ImageHandle::new(*id, Arc::clone(image)))
    }

    fn store(&mut self, path: &str, image: RgbaImage) -> ImageHandle {
        let id = AssetId::from_path(path);
        let image = Arc::new(image);
        self.images.insert(id, Arc::clone(&image));
        self.paths.insert(path.to_string(), id);
        ImageHandle::new(id, image)
    }
}

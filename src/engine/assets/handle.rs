// Shared handles to decoded images

use image::RgbaImage;
use std::fmt;
use std::sync::Arc;

/// Unique identifier for an asset, derived from its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub(crate) u64);

impl AssetId {
    /// Create a new asset ID from a string path
    pub fn from_path(path: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Non-owning view of a decoded image.
///
/// The asset manager owns the pixels; entities and animations hold clones of
/// this handle, which only bump a reference count.
#[derive(Clone)]
pub struct ImageHandle {
    id: AssetId,
    image: Arc<RgbaImage>,
}

impl ImageHandle {
    pub(crate) fn new(id: AssetId, image: Arc<RgbaImage>) -> Self {
        Self { id, image }
    }

    /// Wrap an in-memory image that did not come from disk
    #[cfg(test)]
    pub fn from_image(name: &str, image: RgbaImage) -> Self {
        Self::new(AssetId::from_path(name), Arc::new(image))
    }

    pub fn id(&self) -> AssetId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA pixel at (x, y), or None outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width() && y < self.height() {
            Some(self.image.get_pixel(x, y).0)
        } else {
            None
        }
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("id", &self.id)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.image, &other.image)
    }
}

// Rendering: the drawing-surface contract entities draw against, a CPU
// framebuffer implementing it, and a wgpu presenter that puts the
// framebuffer on screen.

mod framebuffer;
mod presenter;
#[cfg(test)]
pub mod recorder;
pub mod texture;
mod vertex;

pub use framebuffer::Framebuffer;
pub use presenter::Presenter;
pub use texture::FrameTexture;
pub use vertex::Vertex;

use crate::core::math::Rect;
use crate::engine::assets::ImageHandle;

/// RGBA8 color
pub type Color = [u8; 4];

/// Stroke color for debug outlines
pub const OUTLINE_COLOR: Color = [0, 128, 0, 255];

/// Something entities can draw onto.
///
/// Handed to `draw` each frame and never retained; entities cannot create or
/// resize it.
pub trait Surface {
    /// Copy `src` from `image` to `(dest_x, dest_y)`, scaled by `scale`,
    /// optionally mirrored horizontally within the destination box.
    fn draw_image_region(
        &mut self,
        image: &ImageHandle,
        src: Rect,
        dest_x: f32,
        dest_y: f32,
        scale: f32,
        mirrored: bool,
    );

    /// Stroke a one-pixel circle outline
    fn stroke_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color);
}

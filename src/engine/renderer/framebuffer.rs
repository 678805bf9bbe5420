// Software render target

use super::{Color, Surface};
use crate::core::math::Rect;
use crate::engine::assets::ImageHandle;
use image::{Rgba, RgbaImage};

/// Background color used when clearing
const CLEAR_COLOR: Color = [26, 26, 38, 255];

/// CPU-side RGBA target the game draws into every frame.
///
/// Blits are nearest-neighbour with alpha-over blending and are clipped to
/// the target; nothing drawn off-screen is an error.
pub struct Framebuffer {
    pixels: RgbaImage,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba(CLEAR_COLOR)),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Fill the whole target with the clear color
    pub fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba(CLEAR_COLOR);
        }
    }

    /// Pixel at (x, y), None when outside the target
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            Some(self.pixels.get_pixel(x, y).0)
        } else {
            None
        }
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        blend(self.pixels.get_pixel_mut(x as u32, y as u32), color);
    }
}

/// Source-over alpha blend of `src` onto `dst`
fn blend(dst: &mut Rgba<u8>, src: Color) {
    let alpha = src[3] as u32;
    if alpha == 0 {
        return;
    }
    if alpha == 255 {
        *dst = Rgba(src);
        return;
    }

    let inv = 255 - alpha;
    for i in 0..3 {
        dst.0[i] = ((src[i] as u32 * alpha + dst.0[i] as u32 * inv) / 255) as u8;
    }
    dst.0[3] = (alpha + dst.0[3] as u32 * inv / 255) as u8;
}

impl Surface for Framebuffer {
    fn draw_image_region(
        &mut self,
        image: &ImageHandle,
        src: Rect,
        dest_x: f32,
        dest_y: f32,
        scale: f32,
        mirrored: bool,
    ) {
        if !scale.is_finite() || scale <= 0.0 || src.width <= 0.0 || src.height <= 0.0 {
            return;
        }

        let dest_w = src.width * scale;
        let dest_h = src.height * scale;

        let x_start = dest_x.floor().max(0.0) as i64;
        let y_start = dest_y.floor().max(0.0) as i64;
        let x_end = ((dest_x + dest_w).ceil() as i64).min(self.width() as i64);
        let y_end = ((dest_y + dest_h).ceil() as i64).min(self.height() as i64);

        let src_w = src.width as i64;
        let src_h = src.height as i64;

        for py in y_start..y_end {
            let row = ((py as f32 + 0.5 - dest_y) / scale).floor() as i64;
            if row < 0 || row >= src_h {
                continue;
            }
            for px in x_start..x_end {
                let mut col = ((px as f32 + 0.5 - dest_x) / scale).floor() as i64;
                if col < 0 || col >= src_w {
                    continue;
                }
                if mirrored {
                    col = src_w - 1 - col;
                }

                let sx = src.x as i64 + col;
                let sy = src.y as i64 + row;
                if sx < 0 || sy < 0 {
                    continue;
                }
                if let Some(color) = image.pixel(sx as u32, sy as u32) {
                    self.plot(px, py, color);
                }
            }
        }
    }

    fn stroke_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        if !radius.is_finite() || radius <= 0.0 || !center_x.is_finite() || !center_y.is_finite() {
            return;
        }

        // Midpoint circle, one plot per octant
        let cx = center_x.round() as i64;
        let cy = center_y.round() as i64;
        let mut x = radius.round() as i64;
        let mut y = 0i64;
        let mut err = 1 - x;

        while x >= y {
            for (dx, dy) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                self.plot(cx + dx, cy + dy, color);
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }
}

// Test surface that records draw calls instead of rasterising them

use super::{Color, Surface};
use crate::core::math::Rect;
use crate::engine::assets::{AssetId, ImageHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Image {
        image: AssetId,
        src: Rect,
        dest_x: f32,
        dest_y: f32,
        scale: f32,
        mirrored: bool,
    },
    Circle {
        center_x: f32,
        center_y: f32,
        radius: f32,
        color: Color,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image draws only, in call order
    pub fn images(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Image { .. }))
            .collect()
    }

    /// Circle draws only, in call order
    pub fn circles(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_image_region(
        &mut self,
        image: &ImageHandle,
        src: Rect,
        dest_x: f32,
        dest_y: f32,
        scale: f32,
        mirrored: bool,
    ) {
        self.calls.push(DrawCall::Image {
            image: image.id(),
            src,
            dest_x,
            dest_y,
            scale,
            mirrored,
        });
    }

    fn stroke_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center_x,
            center_y,
            radius,
            color,
        });
    }
}

// Sprite-sheet animations
//
// An `Animation` never stores a playhead. The frame on screen is a pure
// function of the elapsed ticks the caller passes in, so drawing twice with
// the same time always picks the same frame.

use super::state::Facing;
use super::EntityError;
use crate::core::math::{non_negative, Rect};
use crate::engine::assets::ImageHandle;
use crate::engine::renderer::Surface;
use std::fmt;

/// Behaviour names an actor can have an animation for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationLabel {
    Idle,
    Run,
    Jump,
}

impl AnimationLabel {
    pub const COUNT: usize = 3;

    fn index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Run => 1,
            Self::Jump => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Jump => "jump",
        }
    }
}

impl fmt::Display for AnimationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One strip of frames on a sprite sheet.
///
/// Frames are laid out left to right starting at `sheet_row`, wrapping onto
/// the next row after `columns` frames.
#[derive(Debug, Clone)]
pub struct Animation {
    sheet: ImageHandle,
    /// Size of one frame in sheet pixels
    frame_width: u32,
    frame_height: u32,
    /// Row of the first frame
    sheet_row: u32,
    /// Frames per sheet row
    columns: u32,
    frame_count: u32,
    /// Ticks each frame stays on screen
    frame_duration: f32,
    scale: f32,
    looping: bool,
}

impl Animation {
    /// Looping animation whose frames all sit on `sheet_row`
    pub fn looping(
        sheet: ImageHandle,
        frame_size: (u32, u32),
        sheet_row: u32,
        frame_count: u32,
        frame_duration: f32,
    ) -> Self {
        Self {
            sheet,
            frame_width: frame_size.0,
            frame_height: frame_size.1,
            sheet_row,
            columns: frame_count.max(1),
            frame_count,
            frame_duration,
            scale: 1.0,
            looping: true,
        }
    }

    /// Animation that stops on its last frame
    #[allow(dead_code)]
    pub fn one_shot(
        sheet: ImageHandle,
        frame_size: (u32, u32),
        sheet_row: u32,
        frame_count: u32,
        frame_duration: f32,
    ) -> Self {
        Self {
            looping: false,
            ..Self::looping(sheet, frame_size, sheet_row, frame_count, frame_duration)
        }
    }

    /// Wrap onto the next sheet row after this many frames
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Reject descriptors that would make frame selection meaningless
    pub fn validate(&self, label: AnimationLabel) -> Result<(), EntityError> {
        let reason = if self.frame_count == 0 {
            Some("frame count must be at least 1")
        } else if self.columns == 0 {
            Some("sheet must have at least one column")
        } else if self.frame_width == 0 || self.frame_height == 0 {
            Some("frame size must be non-zero")
        } else if !(self.frame_duration.is_finite() && self.frame_duration > 0.0) {
            Some("frame duration must be positive")
        } else if !(self.scale.is_finite() && self.scale > 0.0) {
            Some("scale must be positive")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(EntityError::InvalidAnimation { label, reason }),
            None => Ok(()),
        }
    }

    /// Frame shown after `elapsed_ticks`. Always in `[0, frame_count)`.
    pub fn current_frame_index(&self, elapsed_ticks: f64) -> usize {
        let count = self.frame_count.max(1) as u64;
        let step = (non_negative(elapsed_ticks) / self.frame_duration as f64).floor();
        // Saturating cast keeps absurd times in range
        let step = if step.is_finite() { step as u64 } else { 0 };

        if self.looping {
            (step % count) as usize
        } else {
            step.min(count - 1) as usize
        }
    }

    /// Source rectangle on the sheet for the frame shown after `elapsed_ticks`
    pub fn current_frame_rect(&self, elapsed_ticks: f64) -> Rect {
        let index = self.current_frame_index(elapsed_ticks) as u32;
        let columns = self.columns.max(1);
        let col = index % columns;
        let row = self.sheet_row + index / columns;

        Rect::new(
            (col * self.frame_width) as f32,
            (row * self.frame_height) as f32,
            self.frame_width as f32,
            self.frame_height as f32,
        )
    }

    /// Draw the current frame at `(x, y)`, mirrored when facing left
    pub fn draw_frame(
        &self,
        elapsed_ticks: f64,
        surface: &mut dyn Surface,
        x: f32,
        y: f32,
        facing: Facing,
    ) {
        let src = self.current_frame_rect(elapsed_ticks);
        surface.draw_image_region(&self.sheet, src, x, y, self.scale, facing == Facing::Left);
    }
}

/// Fixed table of an actor's animations, one slot per label
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    slots: [Option<Animation>; AnimationLabel::COUNT],
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store an animation, replacing any previous one for the label
    pub fn insert(&mut self, label: AnimationLabel, animation: Animation) -> Result<(), EntityError> {
        animation.validate(label)?;
        self.slots[label.index()] = Some(animation);
        Ok(())
    }

    /// Builder form of [`AnimationSet::insert`]
    pub fn with(mut self, label: AnimationLabel, animation: Animation) -> Result<Self, EntityError> {
        self.insert(label, animation)?;
        Ok(self)
    }

    pub fn get(&self, label: AnimationLabel) -> Option<&Animation> {
        self.slots[label.index()].as_ref()
    }

    pub fn contains(&self, label: AnimationLabel) -> bool {
        self.get(label).is_some()
    }

    /// Fail unless every label in `required` has an animation
    pub fn require(&self, entity: &'static str, required: &[AnimationLabel]) -> Result<(), EntityError> {
        match required.iter().find(|label| !self.contains(**label)) {
            Some(&label) => Err(EntityError::MissingAnimation { entity, label }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::recorder::{DrawCall, RecordingSurface};
    use image::RgbaImage;

    fn sheet() -> ImageHandle {
        ImageHandle::from_image("sheet", RgbaImage::new(400, 200))
    }

    #[test]
    fn test_looping_index_wraps() {
        let anim = Animation::looping(sheet(), (50, 50), 0, 4, 3.0);
        assert_eq!(anim.current_frame_index(0.0), 0);
        assert_eq!(anim.current_frame_index(2.9), 0);
        assert_eq!(anim.current_frame_index(3.0), 1);
        assert_eq!(anim.current_frame_index(11.0), 3);
        assert_eq!(anim.current_frame_index(12.0), 0);
    }

    #[test]
    fn test_index_always_in_range() {
        let anim = Animation::looping(sheet(), (50, 50), 0, 7, 1.5);
        let mut t = 0.0;
        while t < 500.0 {
            assert!(anim.current_frame_index(t) < 7);
            t += 0.25;
        }
        assert!(anim.current_frame_index(f64::MAX) < 7);
    }

    #[test]
    fn test_one_shot_saturates_and_never_decreases() {
        let anim = Animation::one_shot(sheet(), (50, 50), 0, 5, 2.0);
        let mut previous = 0;
        for tick in 0..40 {
            let index = anim.current_frame_index(tick as f64);
            assert!(index >= previous);
            assert!(index < 5);
            previous = index;
        }
        assert_eq!(previous, 4);
        assert_eq!(anim.current_frame_index(1e9), 4);
    }

    #[test]
    fn test_bad_time_normalised() {
        let anim = Animation::looping(sheet(), (50, 50), 0, 4, 3.0);
        assert_eq!(anim.current_frame_index(-7.0), 0);
        assert_eq!(anim.current_frame_index(f64::NAN), 0);
        assert_eq!(anim.current_frame_index(f64::INFINITY), 0);
    }

    #[test]
    fn test_frame_rect_on_row() {
        let anim = Animation::looping(sheet(), (50, 50), 1, 11, 3.0);
        assert_eq!(anim.current_frame_rect(0.0), Rect::new(0.0, 50.0, 50.0, 50.0));
        assert_eq!(anim.current_frame_rect(6.0), Rect::new(100.0, 50.0, 50.0, 50.0));
    }

    #[test]
    fn test_frame_rect_wraps_onto_next_row() {
        // 8 frames on a 4-column sheet
        let anim = Animation::looping(sheet(), (100, 100), 0, 8, 8.0).with_columns(4);
        assert_eq!(anim.current_frame_rect(3.0 * 8.0), Rect::new(300.0, 0.0, 100.0, 100.0));
        assert_eq!(anim.current_frame_rect(4.0 * 8.0), Rect::new(0.0, 100.0, 100.0, 100.0));
        assert_eq!(anim.current_frame_rect(7.0 * 8.0), Rect::new(300.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn test_draw_frame_mirrors_when_facing_left() {
        let anim = Animation::looping(sheet(), (50, 50), 0, 4, 3.0).with_scale(3.0);
        let mut surface = RecordingSurface::new();

        anim.draw_frame(3.0, &mut surface, 200.0, 500.0, Facing::Left);
        anim.draw_frame(3.0, &mut surface, 200.0, 500.0, Facing::Right);

        match (&surface.calls[0], &surface.calls[1]) {
            (
                DrawCall::Image { src, dest_x, dest_y, scale, mirrored: true, .. },
                DrawCall::Image { mirrored: false, .. },
            ) => {
                assert_eq!(*src, Rect::new(50.0, 0.0, 50.0, 50.0));
                assert_eq!((*dest_x, *dest_y), (200.0, 500.0));
                assert_eq!(*scale, 3.0);
            }
            other => panic!("unexpected draw calls: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_degenerate() {
        let zero_frames = Animation::looping(sheet(), (50, 50), 0, 0, 3.0);
        assert!(matches!(
            zero_frames.validate(AnimationLabel::Idle),
            Err(EntityError::InvalidAnimation { label: AnimationLabel::Idle, .. })
        ));

        let zero_duration = Animation::looping(sheet(), (50, 50), 0, 4, 0.0);
        assert!(zero_duration.validate(AnimationLabel::Run).is_err());

        let bad_scale = Animation::looping(sheet(), (50, 50), 0, 4, 1.0).with_scale(f32::NAN);
        assert!(bad_scale.validate(AnimationLabel::Run).is_err());

        let no_columns = Animation::looping(sheet(), (50, 50), 0, 4, 1.0).with_columns(0);
        assert!(no_columns.validate(AnimationLabel::Jump).is_err());
    }

    #[test]
    fn test_index_exact_past_single_precision() {
        // 2^24 + 1 is not representable as f32
        let anim = Animation::looping(sheet(), (50, 50), 0, 2, 1.0);
        assert_eq!(anim.current_frame_index(16_777_216.0), 0);
        assert_eq!(anim.current_frame_index(16_777_217.0), 1);
        assert_eq!(anim.current_frame_index(16_777_218.0), 0);
    }

    #[test]
    fn test_set_require() {
        let set = AnimationSet::new()
            .with(AnimationLabel::Idle, Animation::looping(sheet(), (50, 50), 0, 9, 3.0))
            .unwrap();

        assert!(set.require("hero", &[AnimationLabel::Idle]).is_ok());
        assert_eq!(
            set.require("hero", &[AnimationLabel::Idle, AnimationLabel::Run]),
            Err(EntityError::MissingAnimation {
                entity: "hero",
                label: AnimationLabel::Run
            })
        );
    }

    #[test]
    fn test_set_insert_rejects_invalid() {
        let mut set = AnimationSet::new();
        let err = set
            .insert(AnimationLabel::Run, Animation::looping(sheet(), (0, 50), 0, 4, 1.0))
            .unwrap_err();
        assert!(matches!(err, EntityError::InvalidAnimation { .. }));
        assert!(!set.contains(AnimationLabel::Run));
    }
}

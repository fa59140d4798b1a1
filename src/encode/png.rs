use std::io::Write;

use image::ImageEncoder as _;
use image::codecs::png::PngEncoder as ImagePngEncoder;

use crate::animation::model::Animation;
use crate::encode::{AnimationEncoder, FrameEncoder, ImageEncoder};
use crate::foundation::error::{ImagerError, ImagerResult};
use crate::render::canvas::FrameRGBA;
use crate::render::frame::render_frame;

/// Straight-alpha RGBA8 PNG output. Animations are written as their first frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn encode_image(&self, w: &mut dyn Write, frame: &FrameRGBA) -> ImagerResult<()> {
        if frame.width == 0 || frame.height == 0 {
            return Err(ImagerError::encode(format!(
                "cannot encode empty {}x{} frame as png",
                frame.width, frame.height
            )));
        }
        ImagePngEncoder::new(w).write_image(
            &frame.to_straight_rgba8(),
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }
}

impl FrameEncoder for PngEncoder {
    fn encode_frame(
        &self,
        w: &mut dyn Write,
        anim: &Animation,
        seq_index: usize,
        frame_index: usize,
    ) -> ImagerResult<()> {
        self.encode_image(w, &render_frame(anim, seq_index, frame_index))
    }
}

impl AnimationEncoder for PngEncoder {
    fn encode_animation(
        &self,
        w: &mut dyn Write,
        anim: &Animation,
        seq_index: usize,
        _frame_count: usize,
    ) -> ImagerResult<()> {
        self.encode_frame(w, anim, seq_index, 0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;

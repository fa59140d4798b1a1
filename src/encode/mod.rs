//! Encoders for rendered frames and animations.
//!
//! Encoders are grouped by capability; callers pick the trait matching what they have in hand
//! (an animation tick, a whole animation, one rendered image, or a run of rendered images).

use std::io::Write;

use crate::animation::model::Animation;
use crate::foundation::error::ImagerResult;
use crate::render::canvas::FrameRGBA;

/// GIF palette generation, paletted frames and container writing.
pub mod gif;
/// Single-image PNG output.
pub mod png;
/// Median-cut palette generation and nearest-color lookup.
pub mod quantize;

/// Encodes one tick of an animation.
pub trait FrameEncoder {
    fn encode_frame(
        &self,
        w: &mut dyn Write,
        anim: &Animation,
        seq_index: usize,
        frame_index: usize,
    ) -> ImagerResult<()>;
}

/// Encodes `frame_count` ticks of an animation.
pub trait AnimationEncoder {
    fn encode_animation(
        &self,
        w: &mut dyn Write,
        anim: &Animation,
        seq_index: usize,
        frame_count: usize,
    ) -> ImagerResult<()>;
}

/// Encodes one already rendered frame.
pub trait ImageEncoder {
    fn encode_image(&self, w: &mut dyn Write, frame: &FrameRGBA) -> ImagerResult<()>;
}

/// Encodes a run of already rendered frames of equal size.
pub trait AnimatedImageEncoder {
    fn encode_images(&self, w: &mut dyn Write, frames: &[FrameRGBA]) -> ImagerResult<()>;
}

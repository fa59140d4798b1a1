use std::borrow::Cow;
use std::io::Write;

use rayon::prelude::*;

use crate::animation::model::Animation;
use crate::encode::quantize::{Color, NearestCache, generate_palette};
use crate::encode::{AnimatedImageEncoder, AnimationEncoder, FrameEncoder, ImageEncoder};
use crate::foundation::error::{ImagerError, ImagerResult};
use crate::render::canvas::FrameRGBA;
use crate::render::frame::render_frame;
use crate::render::pipeline::{RenderThreading, build_thread_pool, render_frames};

/// Options for [`GifEncoder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifEncoderOpts {
    /// 16-bit alpha at or above which a pixel is kept; lower pixels become transparent.
    pub alpha_threshold: u16,
    /// Palette size including the transparent slot, in `2..=256`.
    pub colors: usize,
    /// Per-frame delay in hundredths of a second.
    pub delay_cs: u16,
    /// Worker pool used for rendering and for the paletted-frame pass.
    pub threading: RenderThreading,
}

impl Default for GifEncoderOpts {
    fn default() -> Self {
        Self {
            alpha_threshold: 0x8000,
            colors: 256,
            delay_cs: 4,
            threading: RenderThreading::default(),
        }
    }
}

impl GifEncoderOpts {
    pub fn validate(&self) -> ImagerResult<()> {
        if !(2..=256).contains(&self.colors) {
            return Err(ImagerError::validation(format!(
                "gif colors must be in 2..=256, got {}",
                self.colors
            )));
        }
        Ok(())
    }
}

/// What happens to a frame's area before the next frame is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disposal {
    Keep,
    /// Restore the area to the background (transparent).
    #[default]
    Background,
}

impl From<Disposal> for gif::DisposalMethod {
    fn from(d: Disposal) -> Self {
        match d {
            Disposal::Keep => Self::Keep,
            Disposal::Background => Self::Background,
        }
    }
}

/// One paletted frame: an index per pixel into [`QuantizedGif::palette`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PalettedFrame {
    pub indices: Vec<u8>,
    pub delay_cs: u16,
    pub disposal: Disposal,
}

/// Frames mapped onto one shared global palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantizedGif {
    pub width: u32,
    pub height: u32,
    /// Straight RGBA colors; the last entry is the transparent slot.
    pub palette: Vec<Color>,
    pub transparent_index: u8,
    pub frames: Vec<PalettedFrame>,
}

impl QuantizedGif {
    /// Straight RGBA8 pixels of frame `i`, looked up through the palette.
    pub fn frame_rgba8(&self, i: usize) -> Option<Vec<u8>> {
        let frame = self.frames.get(i)?;
        let mut out = Vec::with_capacity(frame.indices.len() * 4);
        for &idx in &frame.indices {
            let c = self.palette.get(usize::from(idx)).copied().unwrap_or([0; 4]);
            out.extend_from_slice(&c);
        }
        Some(out)
    }

    /// Write the frames as an infinitely looping GIF with [`Self::palette`] as the global color
    /// table; frames carry no local tables.
    pub fn write(&self, w: &mut dyn Write) -> ImagerResult<()> {
        let width = u16::try_from(self.width)
            .map_err(|_| ImagerError::encode(format!("gif width too large: {}", self.width)))?;
        let height = u16::try_from(self.height)
            .map_err(|_| ImagerError::encode(format!("gif height too large: {}", self.height)))?;
        let table = self
            .palette
            .iter()
            .flat_map(|c| [c[0], c[1], c[2]])
            .collect::<Vec<u8>>();

        let mut enc = gif::Encoder::new(w, width, height, &table).map_err(gif_error)?;
        enc.set_repeat(gif::Repeat::Infinite).map_err(gif_error)?;
        for frame in &self.frames {
            let out = gif::Frame {
                width,
                height,
                delay: frame.delay_cs,
                dispose: frame.disposal.into(),
                transparent: Some(self.transparent_index),
                palette: None,
                buffer: Cow::Borrowed(&frame.indices),
                ..gif::Frame::default()
            };
            enc.write_frame(&out).map_err(gif_error)?;
        }
        enc.into_inner().map_err(|e| ImagerError::encode(format!("finish gif: {e}")))?;
        Ok(())
    }
}

fn gif_error(e: gif::EncodingError) -> ImagerError {
    ImagerError::encode(format!("write gif: {e}"))
}

/// Palette-based encoder producing one global color table shared by every frame.
#[derive(Clone, Debug, Default)]
pub struct GifEncoder {
    pub opts: GifEncoderOpts,
}

impl GifEncoder {
    pub fn new(opts: GifEncoderOpts) -> Self {
        Self { opts }
    }

    fn keeps(&self, alpha: u8) -> bool {
        u16::from(alpha) * 257 >= self.opts.alpha_threshold
    }

    /// Build the global palette from every frame, then map each frame onto it in parallel.
    ///
    /// All frames must share the first frame's dimensions.
    #[tracing::instrument(skip(self, frames), fields(frames = frames.len()))]
    pub fn quantize_images(&self, frames: &[FrameRGBA]) -> ImagerResult<QuantizedGif> {
        self.opts.validate()?;
        let first = frames
            .first()
            .ok_or_else(|| ImagerError::validation("gif needs at least one frame"))?;
        let (width, height) = (first.width, first.height);
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(ImagerError::validation(format!(
                "gif frame too large: {width}x{height}"
            )));
        }
        if let Some(bad) = frames
            .iter()
            .find(|f| f.width != width || f.height != height)
        {
            return Err(ImagerError::validation(format!(
                "gif frames must share one size: {width}x{height} vs {}x{}",
                bad.width, bad.height
            )));
        }

        let pool = build_thread_pool(self.opts.threading.threads)?;
        let straight = pool.install(|| {
            frames
                .par_iter()
                .map(FrameRGBA::to_straight_rgba8)
                .collect::<Vec<_>>()
        });

        let samples = straight
            .iter()
            .flat_map(|data| data.chunks_exact(4))
            .filter(|px| self.keeps(px[3]))
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect::<Vec<Color>>();
        let mut palette = generate_palette(&samples, self.opts.colors - 1);
        let opaque = palette.len();
        palette.push([0, 0, 0, 0]);
        let transparent_index = opaque as u8;
        tracing::debug!(
            samples = samples.len(),
            colors = palette.len(),
            "generated gif palette"
        );

        let lookup = &palette[..opaque];
        let paletted = pool.install(|| {
            straight
                .par_iter()
                .map(|data| {
                    let mut cache = NearestCache::new(lookup);
                    let indices = data
                        .chunks_exact(4)
                        .map(|px| {
                            if !self.keeps(px[3]) || lookup.is_empty() {
                                transparent_index
                            } else {
                                cache.index([px[0], px[1], px[2], px[3]]) as u8
                            }
                        })
                        .collect::<Vec<u8>>();
                    PalettedFrame {
                        indices,
                        delay_cs: self.opts.delay_cs,
                        disposal: Disposal::Background,
                    }
                })
                .collect::<Vec<_>>()
        });

        Ok(QuantizedGif {
            width,
            height,
            palette,
            transparent_index,
            frames: paletted,
        })
    }
}

impl AnimatedImageEncoder for GifEncoder {
    fn encode_images(&self, w: &mut dyn Write, frames: &[FrameRGBA]) -> ImagerResult<()> {
        self.quantize_images(frames)?.write(w)
    }
}

impl ImageEncoder for GifEncoder {
    fn encode_image(&self, w: &mut dyn Write, frame: &FrameRGBA) -> ImagerResult<()> {
        self.encode_images(w, std::slice::from_ref(frame))
    }
}

impl FrameEncoder for GifEncoder {
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

impl AnimationEncoder for GifEncoder {
    fn encode_animation(
        &self,
        w: &mut dyn Write,
        anim: &Animation,
        seq_index: usize,
        frame_count: usize,
    ) -> ImagerResult<()> {
        let frames = render_frames(anim, seq_index, frame_count, &self.opts.threading)?;
        self.encode_images(w, &frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;

use crate::assets::decode::unpremultiply_rgba8_in_place;
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{ImagerError, ImagerResult};
use crate::render::blend::over;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes this explicit at API
/// boundaries. `origin` is the logical coordinate of the top-left pixel, so sprites positioned
/// at negative coordinates still land inside the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Logical coordinate of pixel `(0, 0)`.
    pub origin: Point,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent canvas covering `bounds`.
    pub fn new(bounds: Rect) -> Self {
        let (width, height) = (bounds.width(), bounds.height());
        Self {
            width,
            height,
            origin: bounds.min,
            data: vec![0; (width as usize) * (height as usize) * 4],
            premultiplied: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height).translate(self.origin)
    }

    /// Composite a uniform color over the whole canvas.
    pub fn fill_over(&mut self, color: Rgba8) {
        let src = color.to_premul();
        for px in self.data.chunks_exact_mut(4) {
            let out = over([px[0], px[1], px[2], px[3]], src, 255);
            px.copy_from_slice(&out);
        }
    }

    /// Premultiplied pixel at logical coordinate `p`, transparent outside the canvas.
    pub fn pixel(&self, p: Point) -> [u8; 4] {
        if !self.bounds().contains(p) {
            return [0; 4];
        }
        let local = p - self.origin;
        let i = self.index(local.x as u32, local.y as u32);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Straight-alpha copy of the pixels, as most container encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut data = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut data);
        }
        data
    }

    pub fn to_rgba_image(&self) -> ImagerResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_straight_rgba8())
            .ok_or_else(|| ImagerError::encode("frame buffer does not match its dimensions"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;

use std::sync::Arc;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{ImagerError, ImagerResult};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Decoded raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Wrap premultiplied bytes, checking the buffer length against the dimensions.
    pub fn new(width: u32, height: u32, rgba8_premul: Vec<u8>) -> ImagerResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| ImagerError::validation("image size overflow"))?;
        if rgba8_premul.len() != expected {
            return Err(ImagerError::validation(format!(
                "image buffer is {} bytes, expected {expected} for {width}x{height}",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Image filled with one premultiplied pixel value.
    pub fn solid(width: u32, height: u32, px: [u8; 4]) -> Self {
        let n = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(n * 4);
        for _ in 0..n {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            rgba8_premul: Arc::new(data),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = &self.rgba8_premul[i..i + 4];
        [p[0], p[1], p[2], p[3]]
    }
}

/// Named image entry of an asset library.
///
/// An asset may alias another one through `source`; the alias carries its own offset and flip
/// flags while the pixels come from the end of the alias chain.
#[derive(Clone, Debug, Default)]
pub struct Asset {
    pub name: String,
    pub source: Option<Arc<Asset>>,
    pub flip_h: bool,
    /// Carried from the asset manifest; drawing only mirrors horizontally.
    pub flip_v: bool,
    /// Logical origin of the image; the image is drawn at `-offset`.
    pub offset: Point,
    pub image: Option<PreparedImage>,
}

impl Asset {
    pub fn new(name: impl Into<String>, image: PreparedImage, offset: Point) -> Self {
        Self {
            name: name.into(),
            source: None,
            flip_h: false,
            flip_v: false,
            offset,
            image: Some(image),
        }
    }

    /// Asset that reuses the pixels of `source`.
    pub fn alias(
        name: impl Into<String>,
        source: Arc<Asset>,
        flip_h: bool,
        offset: Point,
    ) -> Self {
        Self {
            name: name.into(),
            source: Some(source),
            flip_h,
            flip_v: false,
            offset,
            image: None,
        }
    }

    /// Canonical decoded image, following the alias chain.
    pub fn source_image(&self) -> Option<&PreparedImage> {
        let mut asset = self;
        while let Some(src) = asset.source.as_deref() {
            asset = src;
        }
        asset.image.as_ref()
    }

    /// Width of the canonical image, `0` when the asset has no pixels.
    pub fn source_width(&self) -> u32 {
        self.source_image().map_or(0, |img| img.width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/asset.rs"]
mod tests;

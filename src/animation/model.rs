use std::collections::BTreeMap;
use std::sync::Arc;

use crate::assets::asset::{Asset, PreparedImage};
use crate::foundation::core::{Point, Rect, Rgba8};

/// Reserved layer id of a furniture shadow; always drawn first.
pub const SHADOW_LAYER_ID: i32 = -1;

/// Fixed opacity of furniture shadows.
pub const SHADOW_ALPHA: u8 = 46;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Blend {
    /// Source-over, scaled by the sprite alpha.
    #[default]
    Normal,
    /// Per-channel saturating add that keeps the destination alpha.
    Add,
    /// Authored "copy" ink; drawn like `Normal` with the sprite alpha.
    Copy,
}

impl Blend {
    /// Blend mode for an authored furniture ink.
    pub fn from_ink(ink: &str) -> Self {
        match ink {
            "ADD" => Self::Add,
            "COPY" => Self::Copy,
            _ => Self::Normal,
        }
    }
}

/// A positioned, tinted reference to an asset.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub asset: Arc<Asset>,
    pub flip_h: bool,
    /// Logical origin inside the image; the image's top-left lands at `-offset`.
    pub offset: Point,
    pub color: Rgba8,
    pub blend: Blend,
    pub alpha: u8,
}

impl Sprite {
    /// Untinted, unflipped sprite using the asset's authored offset.
    pub fn new(asset: Arc<Asset>) -> Self {
        let offset = asset.offset;
        Self {
            asset,
            flip_h: false,
            offset,
            color: Rgba8::WHITE,
            blend: Blend::Normal,
            alpha: 255,
        }
    }

    pub fn image(&self) -> Option<&PreparedImage> {
        self.asset.source_image()
    }

    /// Image bounds shifted by the offset; empty when the asset has no pixels.
    pub fn bounds(&self) -> Rect {
        match self.image() {
            Some(img) => img.bounds().translate(Point::ZERO - self.offset),
            None => Rect::EMPTY,
        }
    }
}

/// Sprites drawn in list order.
#[derive(Clone, Debug, Default)]
pub struct Frame(pub Vec<Sprite>);

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sprite: Sprite) {
        self.0.push(sprite);
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        self.0
            .iter()
            .fold(Rect::EMPTY, |acc, s| acc.union(s.bounds()))
    }
}

impl From<Vec<Sprite>> for Frame {
    fn from(sprites: Vec<Sprite>) -> Self {
        Self(sprites)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnimationLayer {
    pub frames: BTreeMap<i32, Frame>,
    /// Ticks each logical frame is held; `0` behaves like `1`.
    pub frame_repeat: u32,
    pub sequences: Vec<Vec<i32>>,
    pub z: i32,
}

impl AnimationLayer {
    /// Layer showing `frame` as frame `0` forever.
    pub fn single(frame: Frame) -> Self {
        Self {
            frames: BTreeMap::from([(0, frame)]),
            frame_repeat: 0,
            sequences: vec![vec![0]],
            z: 0,
        }
    }
}

/// Layered, possibly animated sprite composition produced by the imagers.
#[derive(Clone, Debug, Default)]
pub struct Animation {
    /// Painted under every frame when set and not fully transparent.
    pub background: Option<Rgba8>,
    pub layers: BTreeMap<i32, AnimationLayer>,
}

impl Animation {
    /// Union of every sprite's bounds across all layers and frames.
    ///
    /// Bounds do not depend on the selected sequence, so every sequence of one animation
    /// renders onto the same canvas.
    pub fn bounds(&self) -> Rect {
        self.layers
            .values()
            .flat_map(|layer| layer.frames.values())
            .fold(Rect::EMPTY, |acc, frame| acc.union(frame.bounds()))
    }

    /// Distinct assets drawn by the frames each layer's selected sequence references,
    /// sorted by asset name.
    pub fn required_assets(&self, seq_index: usize) -> Vec<Arc<Asset>> {
        let mut by_name: BTreeMap<&str, &Arc<Asset>> = BTreeMap::new();
        for layer in self.layers.values() {
            for frame_id in layer.sequence_or_default(seq_index) {
                let Some(frame) = layer.frames.get(frame_id) else {
                    continue;
                };
                for sprite in frame.sprites() {
                    by_name.entry(sprite.asset.name.as_str()).or_insert(&sprite.asset);
                }
            }
        }
        by_name.into_values().cloned().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/model.rs"]
mod tests;

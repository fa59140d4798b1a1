use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::animation::model::{
    Animation, AnimationLayer, Blend, Frame, SHADOW_ALPHA, SHADOW_LAYER_ID, Sprite,
};
use crate::assets::asset::Asset;
use crate::assets::furni::{
    Visualization, VisualizationAnimation, VisualizationKind, furni_asset_name,
};
use crate::assets::library::{AssetLibrary, LibraryManager};
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{ImagerError, ImagerResult};

/// Selector for one furniture rendering.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Furni {
    /// Furniture identifier; also the name of its asset library.
    pub identifier: String,
    pub size: u32,
    pub direction: u8,
    #[serde(default)]
    pub state: i32,
    /// Animation sequence index used when rendering.
    #[serde(default)]
    pub sequence: usize,
    #[serde(default)]
    pub color: i32,
    #[serde(default)]
    pub shadow: bool,
}

impl Furni {
    pub fn new(identifier: impl Into<String>, size: u32, direction: u8) -> Self {
        Self {
            identifier: identifier.into(),
            size,
            direction,
            state: 0,
            sequence: 0,
            color: 0,
            shadow: false,
        }
    }

    pub fn with_state(mut self, state: i32) -> Self {
        self.state = state;
        self
    }

    pub fn with_color(mut self, color: i32) -> Self {
        self.color = color;
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }
}

/// Furniture compositor.
#[derive(Clone, Copy)]
pub struct FurniImager<'a> {
    libraries: &'a dyn LibraryManager,
}

impl std::fmt::Debug for FurniImager<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FurniImager")
            .field("libraries", &self.libraries.library_names())
            .finish()
    }
}

impl<'a> FurniImager<'a> {
    pub fn new(libraries: &'a dyn LibraryManager) -> Self {
        Self { libraries }
    }

    #[tracing::instrument(
        skip(self, furni),
        fields(identifier = %furni.identifier, size = furni.size, direction = furni.direction)
    )]
    pub fn compose(&self, furni: &Furni) -> ImagerResult<Animation> {
        let lib = self.libraries.library(&furni.identifier).ok_or_else(|| {
            ImagerError::state(format!("furniture library not loaded: {:?}", furni.identifier))
        })?;
        let index = lib.index().ok_or_else(|| {
            ImagerError::validation(format!("not a furniture library: {:?}", furni.identifier))
        })?;
        let vis = lib
            .visualizations()
            .and_then(|v| v.get(&furni.size))
            .ok_or_else(|| {
                ImagerError::validation(format!(
                    "no visualization for size {} [{}]",
                    furni.size, furni.identifier
                ))
            })?;
        if !vis.supports_direction(furni.direction) {
            return Err(ImagerError::NoVisualizationForDirection {
                identifier: furni.identifier.clone(),
                direction: furni.direction,
            });
        }

        match index.visualization_kind() {
            VisualizationKind::Static => {
                let frame = compose_static(lib, vis, furni)?;
                Ok(Animation {
                    background: None,
                    layers: BTreeMap::from([(0, AnimationLayer::single(frame))]),
                })
            }
            VisualizationKind::Animated => compose_animated(lib, vis, furni),
            VisualizationKind::Other(kind) => Err(ImagerError::validation(format!(
                "visualization type not implemented: {kind}"
            ))),
        }
    }
}

/// Layer ids to build: the shadow slot when requested, then `0..layer_count`.
fn layer_ids(vis: &Visualization, furni: &Furni) -> impl Iterator<Item = i32> {
    let first = if furni.shadow { SHADOW_LAYER_ID } else { 0 };
    first..vis.layer_count.max(0)
}

/// `None` when the library has no such asset; a listed asset that fails to load is an error.
fn lookup(
    lib: &dyn AssetLibrary,
    furni: &Furni,
    layer: i32,
    frame: i32,
) -> ImagerResult<Option<Arc<Asset>>> {
    let name = furni_asset_name(&furni.identifier, furni.size, layer, furni.direction, frame);
    if !lib.asset_exists(&name) {
        tracing::debug!(asset = %name, "furniture asset missing, skipping");
        return Ok(None);
    }
    Ok(Some(lib.asset(&name)?))
}

/// Sprite for a furniture asset; authored horizontal flips normalize the offset once.
fn furni_sprite(asset: Arc<Asset>) -> Sprite {
    let mut offset = asset.offset;
    if asset.flip_h {
        offset = Point::new(-offset.x + asset.source_width() as i32, offset.y);
    }
    let mut sprite = Sprite::new(Arc::clone(&asset));
    sprite.flip_h = asset.flip_h;
    sprite.offset = offset;
    sprite
}

fn apply_shadow(sprite: &mut Sprite) {
    sprite.blend = Blend::Copy;
    sprite.alpha = SHADOW_ALPHA;
}

fn compose_static(
    lib: &dyn AssetLibrary,
    vis: &Visualization,
    furni: &Furni,
) -> ImagerResult<Frame> {
    let mut frame = Frame::new();
    for layer in layer_ids(vis, furni) {
        let Some(asset) = lookup(lib, furni, layer, 0)? else {
            continue;
        };
        let mut sprite = furni_sprite(asset);
        if layer == SHADOW_LAYER_ID {
            apply_shadow(&mut sprite);
        }
        frame.push(sprite);
    }
    Ok(frame)
}

fn compose_animated(
    lib: &dyn AssetLibrary,
    vis: &Visualization,
    furni: &Furni,
) -> ImagerResult<Animation> {
    let empty = VisualizationAnimation::default();
    let vis_anim = match vis.animations.get(&furni.state) {
        Some(a) => a,
        None if vis.animations.is_empty() && furni.state == 0 => &empty,
        None => {
            return Err(ImagerError::NoAnimationForState {
                identifier: furni.identifier.clone(),
                state: furni.state,
            });
        }
    };

    let mut layers = BTreeMap::new();
    for layer_id in layer_ids(vis, furni) {
        let anim_layer = vis_anim.layers.get(&layer_id);
        let (frame_repeat, sequences) = match anim_layer {
            Some(l) => (l.frame_repeat.max(0) as u32, l.frame_sequences.clone()),
            None => (0, vec![vec![0]]),
        };

        let mut required: BTreeSet<i32> = sequences.iter().flatten().copied().collect();
        if required.is_empty() {
            required.insert(0);
        }

        let vis_layer = vis.layers.get(&layer_id);
        let mut blend = vis_layer.map_or(Blend::Normal, |l| Blend::from_ink(&l.ink));
        let mut alpha = vis_layer
            .filter(|l| l.alpha > 0)
            .map_or(255, |l| l.alpha.min(255) as u8);
        if layer_id == SHADOW_LAYER_ID {
            blend = Blend::Copy;
            alpha = SHADOW_ALPHA;
        }
        let color = layer_tint(vis, furni, layer_id);

        let mut frames = BTreeMap::new();
        for frame_id in required {
            let Some(asset) = lookup(lib, furni, layer_id, frame_id)? else {
                continue;
            };
            let mut sprite = furni_sprite(asset);
            sprite.blend = blend;
            sprite.alpha = alpha;
            sprite.color = color;
            frames.insert(frame_id, Frame::from(vec![sprite]));
        }

        layers.insert(
            layer_id,
            AnimationLayer {
                frames,
                frame_repeat,
                sequences,
                z: vis_layer.map_or(0, |l| l.z),
            },
        );
    }

    Ok(Animation {
        background: None,
        layers,
    })
}

fn layer_tint(vis: &Visualization, furni: &Furni, layer: i32) -> Rgba8 {
    let Some(hex) = vis.layer_color(furni.color, layer) else {
        return Rgba8::WHITE;
    };
    match Rgba8::from_hex(hex) {
        Ok(c) => c,
        Err(err) => {
            tracing::warn!(%err, layer, color = furni.color, "ignoring furniture layer color");
            Rgba8::WHITE
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/imager/furni.rs"]
mod tests;

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Context;

use crate::foundation::error::ImagerResult;

pub const STATIC_VISUALIZATION: &str = "furniture_static";
pub const ANIMATED_VISUALIZATION: &str = "furniture_animated";

/// Rendering strategy named by a furniture index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisualizationKind {
    Static,
    Animated,
    Other(String),
}

impl VisualizationKind {
    pub fn parse(s: &str) -> Self {
        match s {
            STATIC_VISUALIZATION => Self::Static,
            ANIMATED_VISUALIZATION => Self::Animated,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Furniture index describing the visualization and logic types.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FurniIndex {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub visualization: String,
    #[serde(default)]
    pub logic: String,
}

impl FurniIndex {
    pub fn visualization_kind(&self) -> VisualizationKind {
        VisualizationKind::parse(&self.visualization)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VisualizationLayer {
    pub id: i32,
    #[serde(default)]
    pub z: i32,
    /// Authored opacity, `0` meaning "unset".
    #[serde(default)]
    pub alpha: i32,
    /// Authored blend ink, e.g. `"ADD"` or `"COPY"`.
    #[serde(default)]
    pub ink: String,
    #[serde(default)]
    pub ignore_mouse: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VisualizationColor {
    pub id: i32,
    /// Layer id to hex RGB tint.
    #[serde(default)]
    pub layers: BTreeMap<i32, String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VisualizationAnimationLayer {
    pub id: i32,
    #[serde(default)]
    pub loop_count: i32,
    #[serde(default)]
    pub frame_repeat: i32,
    #[serde(default)]
    pub frame_sequences: Vec<Vec<i32>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VisualizationAnimation {
    pub id: i32,
    #[serde(default)]
    pub layers: BTreeMap<i32, VisualizationAnimationLayer>,
}

/// Per-size furniture visualization metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Visualization {
    pub size: u32,
    pub layer_count: i32,
    #[serde(default)]
    pub angle: i32,
    pub directions: BTreeSet<u8>,
    #[serde(default)]
    pub layers: BTreeMap<i32, VisualizationLayer>,
    #[serde(default)]
    pub colors: BTreeMap<i32, VisualizationColor>,
    /// Animations keyed by furniture state.
    #[serde(default)]
    pub animations: BTreeMap<i32, VisualizationAnimation>,
}

impl Visualization {
    pub fn supports_direction(&self, direction: u8) -> bool {
        self.directions.contains(&direction)
    }

    /// Authored hex tint of `layer` under color scheme `color`.
    pub fn layer_color(&self, color: i32, layer: i32) -> Option<&str> {
        self.colors.get(&color)?.layers.get(&layer).map(String::as_str)
    }
}

/// Everything a furniture library carries besides its assets.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FurniMetadata {
    pub index: FurniIndex,
    /// Visualizations keyed by size.
    pub visualizations: BTreeMap<u32, Visualization>,
}

impl FurniMetadata {
    pub fn from_json(json: &str) -> ImagerResult<Self> {
        Ok(serde_json::from_str(json).context("parse furniture metadata json")?)
    }
}

/// Name of a furniture layer: `a` for layer 0, `b` for layer 1, and `sd` for the shadow.
pub fn layer_tag(layer: i32) -> String {
    if layer < 0 {
        return "sd".to_owned();
    }
    char::from_u32(u32::from('a') + layer as u32)
        .map(String::from)
        .unwrap_or_else(|| layer.to_string())
}

/// Asset name `{identifier}_{size}_{layer}_{direction}_{frame}`.
pub fn furni_asset_name(
    identifier: &str,
    size: u32,
    layer: i32,
    direction: u8,
    frame: i32,
) -> String {
    format!("{identifier}_{size}_{}_{direction}_{frame}", layer_tag(layer))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/furni.rs"]
mod tests;

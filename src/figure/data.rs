use std::collections::{BTreeMap, HashMap};

use anyhow::Context;

use crate::figure::part::FigurePartType;
use crate::foundation::error::ImagerResult;

/// Read-only access to part-set definitions and color palettes.
pub trait FigureDataProvider: Send + Sync {
    fn part_set(&self, part_type: FigurePartType, id: i32) -> Option<&FigurePartSetInfo>;

    /// Palette selected for `part_type` through the type to palette-id mapping.
    fn palette_for(&self, part_type: FigurePartType) -> Option<&FigureColorPalette>;
}

/// Read-only mapping from figure parts to the asset library that owns them.
pub trait FigureMapProvider: Send + Sync {
    fn library_for(&self, part_type: FigurePartType, id: i32) -> Option<&str>;
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FigureColor {
    pub id: i32,
    #[serde(default)]
    pub index: i32,
    #[serde(default)]
    pub club: i32,
    #[serde(default)]
    pub selectable: bool,
    /// Hex RGB value, e.g. `"ffcb98"`.
    pub value: String,
}

pub type FigureColorPalette = BTreeMap<i32, FigureColor>;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FigurePartInfo {
    pub id: i32,
    #[serde(rename = "type")]
    pub part_type: FigurePartType,
    #[serde(default)]
    pub colorable: bool,
    #[serde(default)]
    pub index: i32,
    /// 1-based index into the figure item's colors; `0` means uncolored.
    #[serde(default)]
    pub color_index: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FigurePartSetInfo {
    pub id: i32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub club: i32,
    #[serde(default)]
    pub colorable: bool,
    #[serde(default)]
    pub selectable: bool,
    #[serde(default)]
    pub preselectable: bool,
    pub parts: Vec<FigurePartInfo>,
    /// Layer types suppressed while this set is worn.
    #[serde(default)]
    pub hidden_layers: Vec<FigurePartType>,
}

/// Part-set definitions and palettes, as loaded from the game's figure data.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FigureData {
    #[serde(default)]
    pub palettes: BTreeMap<i32, FigureColorPalette>,
    #[serde(default)]
    pub set_palettes: BTreeMap<FigurePartType, i32>,
    #[serde(default)]
    pub sets: BTreeMap<FigurePartType, BTreeMap<i32, FigurePartSetInfo>>,
}

impl FigureData {
    pub fn from_json(json: &str) -> ImagerResult<Self> {
        Ok(serde_json::from_str(json).context("parse figure data json")?)
    }

    /// Register a part set under its own type and id, replacing any existing one.
    pub fn insert_set(&mut self, part_type: FigurePartType, set: FigurePartSetInfo) {
        self.sets.entry(part_type).or_default().insert(set.id, set);
    }
}

impl FigureDataProvider for FigureData {
    fn part_set(&self, part_type: FigurePartType, id: i32) -> Option<&FigurePartSetInfo> {
        self.sets.get(&part_type)?.get(&id)
    }

    fn palette_for(&self, part_type: FigurePartType) -> Option<&FigureColorPalette> {
        let palette_id = self.set_palettes.get(&part_type)?;
        self.palettes.get(palette_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FigureMapPart {
    #[serde(rename = "type")]
    pub part_type: FigurePartType,
    pub id: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FigureMapLib {
    pub name: String,
    #[serde(default)]
    pub revision: i32,
    pub parts: Vec<FigureMapPart>,
}

/// Part to library index built from the figure map's library list.
///
/// When the same part is listed by more than one library the first listing wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<FigureMapLib>", into = "Vec<FigureMapLib>")]
pub struct FigureMap {
    libs: Vec<FigureMapLib>,
    parts: HashMap<FigureMapPart, usize>,
}

impl FigureMap {
    pub fn new(libs: Vec<FigureMapLib>) -> Self {
        let mut parts = HashMap::new();
        for (i, lib) in libs.iter().enumerate() {
            for part in &lib.parts {
                parts.entry(*part).or_insert(i);
            }
        }
        Self { libs, parts }
    }

    pub fn from_json(json: &str) -> ImagerResult<Self> {
        Ok(serde_json::from_str(json).context("parse figure map json")?)
    }

    pub fn libs(&self) -> &[FigureMapLib] {
        &self.libs
    }

    pub fn lib(&self, name: &str) -> Option<&FigureMapLib> {
        self.libs.iter().find(|l| l.name == name)
    }
}

impl From<Vec<FigureMapLib>> for FigureMap {
    fn from(libs: Vec<FigureMapLib>) -> Self {
        Self::new(libs)
    }
}

impl From<FigureMap> for Vec<FigureMapLib> {
    fn from(map: FigureMap) -> Self {
        map.libs
    }
}

impl FigureMapProvider for FigureMap {
    fn library_for(&self, part_type: FigurePartType, id: i32) -> Option<&str> {
        let idx = *self.parts.get(&FigureMapPart { part_type, id })?;
        self.libs.get(idx).map(|l| l.name.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/figure/data.rs"]
mod tests;

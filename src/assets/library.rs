use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::assets::asset::Asset;
use crate::assets::furni::{FurniIndex, FurniMetadata, Visualization};
use crate::foundation::error::{ImagerError, ImagerResult};

/// Name-keyed source of decoded assets.
///
/// Furniture libraries additionally expose their index and per-size visualizations; figure
/// part libraries leave both at their `None` defaults.
pub trait AssetLibrary: Send + Sync {
    fn name(&self) -> &str;

    fn asset_names(&self) -> Vec<&str>;

    fn asset_exists(&self, name: &str) -> bool;

    /// Lookup an asset; a miss is [`ImagerError::AssetNotFound`].
    fn asset(&self, name: &str) -> ImagerResult<Arc<Asset>>;

    fn index(&self) -> Option<&FurniIndex> {
        None
    }

    fn visualizations(&self) -> Option<&BTreeMap<u32, Visualization>> {
        None
    }
}

/// Read-only set of loaded libraries, keyed by library name.
pub trait LibraryManager: Send + Sync {
    fn library(&self, name: &str) -> Option<&dyn AssetLibrary>;

    fn library_names(&self) -> Vec<&str>;

    fn library_exists(&self, name: &str) -> bool {
        self.library(name).is_some()
    }
}

#[derive(Clone, Debug, Default)]
/// In-memory asset library, filled by an external loader or by tests.
pub struct MemoryLibrary {
    name: String,
    assets: HashMap<String, Arc<Asset>>,
    furni: Option<FurniMetadata>,
}

impl MemoryLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assets: HashMap::new(),
            furni: None,
        }
    }

    /// Furniture library carrying `metadata`.
    pub fn furni(name: impl Into<String>, metadata: FurniMetadata) -> Self {
        Self {
            furni: Some(metadata),
            ..Self::new(name)
        }
    }

    /// Insert or replace an asset, returning the shared handle so aliases can point at it.
    pub fn insert(&mut self, asset: Asset) -> Arc<Asset> {
        let asset = Arc::new(asset);
        self.assets.insert(asset.name.clone(), Arc::clone(&asset));
        asset
    }

    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.insert(asset);
        self
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetLibrary for MemoryLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn asset_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.assets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn asset_exists(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    fn asset(&self, name: &str) -> ImagerResult<Arc<Asset>> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| ImagerError::AssetNotFound(name.to_owned()))
    }

    fn index(&self) -> Option<&FurniIndex> {
        self.furni.as_ref().map(|f| &f.index)
    }

    fn visualizations(&self) -> Option<&BTreeMap<u32, Visualization>> {
        self.furni.as_ref().map(|f| &f.visualizations)
    }
}

#[derive(Default)]
/// Owning [`LibraryManager`] implementation.
pub struct LibraryStore {
    libs: BTreeMap<String, Box<dyn AssetLibrary>>,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a library; loading a second library under the same name is a state error.
    pub fn add_library(&mut self, library: impl AssetLibrary + 'static) -> ImagerResult<()> {
        let name = library.name().to_owned();
        if self.libs.contains_key(&name) {
            return Err(ImagerError::state(format!("library already loaded: {name:?}")));
        }
        tracing::debug!(library = %name, "library added");
        self.libs.insert(name, Box::new(library));
        Ok(())
    }

    pub fn with_library(mut self, library: impl AssetLibrary + 'static) -> ImagerResult<Self> {
        self.add_library(library)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.libs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libs.is_empty()
    }
}

impl std::fmt::Debug for LibraryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibraryStore")
            .field("libs", &self.libs.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl LibraryManager for LibraryStore {
    fn library(&self, name: &str) -> Option<&dyn AssetLibrary> {
        self.libs.get(name).map(|lib| lib.as_ref())
    }

    fn library_names(&self) -> Vec<&str> {
        self.libs.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/library.rs"]
mod tests;

use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use mapgen_core::{ParseResourceLocationError, ResourceLocation};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

pub mod extractor;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Registry file {0:?} not found")]
    NotFound(PathBuf),
    #[error("Io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Json error on {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid key in {path:?}: {source}")]
    InvalidKey {
        path: PathBuf,
        source: ParseResourceLocationError,
    },
}

/// A Java edition registry, e.g. `minecraft:item` or `minecraft:block`.
pub trait JavaRegistry {
    /// Every key, in registry order.
    fn keys(&self) -> impl Iterator<Item = &ResourceLocation>;

    /// The numeric protocol id of `key`, `None` if it can't be resolved.
    fn protocol_id(&self, key: &ResourceLocation) -> Option<i32>;
}

/// Registry backed by data extracted from a vanilla server.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    entries: IndexMap<ResourceLocation, Option<i32>>,
}

#[derive(Deserialize, Clone, Debug)]
struct JsonItem {
    id: Option<i32>,
}

#[derive(Deserialize, Clone, Debug)]
struct JsonBlock {
    #[serde(default)]
    states: Vec<JsonBlockState>,
}

/// One possible state of a Block.
#[derive(Deserialize, Clone, Debug)]
struct JsonBlockState {
    id: i32,
    /// Whether this is the default state of the Block
    #[serde(default, rename = "default")]
    is_default: bool,
}

impl Registry {
    /// Loads an `items.json`: `{ "<key>": { "id": <protocol id>, ... }, ... }`.
    pub fn load_items(path: &Path) -> Result<Self, RegistryError> {
        let items: IndexMap<String, JsonItem> = read_json(path)?;
        items
            .into_iter()
            .map(|(key, item)| Ok((parse_key(path, &key)?, item.id)))
            .collect()
    }

    /// Loads a `blocks.json`: `{ "<key>": { "states": [ { "id": .., "default": .. } ] }, ... }`.
    ///
    /// A block's protocol id is the id of its default state.
    pub fn load_blocks(path: &Path) -> Result<Self, RegistryError> {
        let blocks: IndexMap<String, JsonBlock> = read_json(path)?;
        blocks
            .into_iter()
            .map(|(key, block)| {
                let default_state = block.states.iter().find(|state| state.is_default);
                Ok((parse_key(path, &key)?, default_state.map(|state| state.id)))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The first occurrence of a key wins, so `stone` followed by `minecraft:stone` keeps the first id.
impl FromIterator<(ResourceLocation, Option<i32>)> for Registry {
    fn from_iter<T: IntoIterator<Item = (ResourceLocation, Option<i32>)>>(iter: T) -> Self {
        let mut entries = IndexMap::new();
        for (key, protocol_id) in iter {
            entries.entry(key).or_insert(protocol_id);
        }
        Self { entries }
    }
}

impl JavaRegistry for Registry {
    fn keys(&self) -> impl Iterator<Item = &ResourceLocation> {
        self.entries.keys()
    }

    fn protocol_id(&self, key: &ResourceLocation) -> Option<i32> {
        self.entries.get(key).copied().flatten()
    }
}

fn parse_key(path: &Path, key: &str) -> Result<ResourceLocation, RegistryError> {
    key.parse().map_err(|source| RegistryError::InvalidKey {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, RegistryError> {
    if !path.exists() {
        return Err(RegistryError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| RegistryError::Json {
        path: path.to_path_buf(),
        source,
    })
}

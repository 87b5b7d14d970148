use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const DEFAULT_NAMESPACE: &str = "minecraft";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid resource location '{0}'")]
pub struct ParseResourceLocationError(pub String);

/// A namespaced registry key, e.g. `minecraft:stone`.
///
/// Keys without a namespace are placed in the `minecraft` namespace.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{namespace}:{path}")]
pub struct ResourceLocation {
    pub namespace: String,
    pub path: String,
}

impl ResourceLocation {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    pub fn vanilla(path: impl Into<String>) -> Self {
        Self::new(DEFAULT_NAMESPACE, path)
    }
}

impl FromStr for ResourceLocation {
    type Err = ParseResourceLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = s.split_once(':').unwrap_or((DEFAULT_NAMESPACE, s));
        if namespace.is_empty() || path.is_empty() || path.contains(':') {
            return Err(ParseResourceLocationError(s.to_string()));
        }
        Ok(Self::new(namespace, path))
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

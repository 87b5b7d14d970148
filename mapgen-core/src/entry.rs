use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::MAX_DATA_VALUE;

/// Java items or blocks keyed by their full identifier.
pub type JavaTable = IndexMap<String, JavaEntry>;

/// Bedrock items or blocks keyed by name.
pub type BedrockTable = IndexMap<String, BedrockEntry>;

/// A Java registry entry. This is also the shape of `java_items.json` and `java_blocks.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaEntry {
    pub identifier: String,
    pub protocol_id: i32,
}

impl JavaEntry {
    pub fn new(identifier: impl Into<String>, protocol_id: i32) -> Self {
        Self {
            identifier: identifier.into(),
            protocol_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedrockEntry {
    pub name: String,
    pub runtime_id: i32,
    /// Legacy 4 bit sub type, see [`crate::variant`].
    pub data: u8,
}

impl BedrockEntry {
    pub fn new(name: impl Into<String>, runtime_id: i32) -> Self {
        Self {
            name: name.into(),
            runtime_id,
            data: 0,
        }
    }

    /// Same name and runtime id, different data value.
    #[must_use]
    pub fn with_data(&self, data: u8) -> Self {
        debug_assert!(data <= MAX_DATA_VALUE, "data value {data} does not fit in 4 bits");
        Self {
            name: self.name.clone(),
            runtime_id: self.runtime_id,
            data,
        }
    }
}

/// Java entry -> every Bedrock entry it converts to, in the order they were matched.
///
/// A Java entry only gets a key once something is appended to it.
#[derive(Debug, Default)]
pub struct ConversionTable {
    conversions: IndexMap<JavaEntry, Vec<BedrockEntry>>,
}

impl ConversionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, java: &JavaEntry, bedrock: BedrockEntry) {
        if let Some(list) = self.conversions.get_mut(java) {
            list.push(bedrock);
        } else {
            self.conversions.insert(java.clone(), vec![bedrock]);
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&[BedrockEntry]> {
        self.conversions
            .iter()
            .find(|(java, _)| java.identifier == identifier)
            .map(|(_, list)| list.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JavaEntry, &[BedrockEntry])> {
        self.conversions
            .iter()
            .map(|(java, list)| (java, list.as_slice()))
    }

    /// Number of Java entries with at least one conversion.
    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }
}

/// One line of `item_mappings.json` / `block_mappings.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub java_identifier: String,
    pub java_protocol_id: i32,
    pub bedrock_identifier: String,
    pub bedrock_runtime_id: i32,
    pub bedrock_data: u8,
}

impl OutputRecord {
    pub fn new(java: &JavaEntry, bedrock: &BedrockEntry) -> Self {
        Self {
            java_identifier: java.identifier.clone(),
            java_protocol_id: java.protocol_id,
            bedrock_identifier: bedrock.name.clone(),
            bedrock_runtime_id: bedrock.runtime_id,
            bedrock_data: bedrock.data,
        }
    }
}

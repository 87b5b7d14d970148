use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};
use mapgen_core::{BedrockEntry, BedrockTable};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BedrockError {
    #[error("Bedrock runtime id table {0:?} not found")]
    ResourceNotFound(PathBuf),
    #[error("Couldn't read Bedrock runtime id table {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Bedrock runtime id table {path:?} is not a json array: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize, Debug)]
struct BedrockRecord {
    name: String,
    id: i32,
}

/// Loads a `runtime_item_ids.json` / `runtime_block_ids.json` style table:
/// an array of objects with at least `name` and `id`.
///
/// The first record for a name wins. Records without a usable `name`/`id` are skipped.
pub fn load_bedrock_table(path: &Path) -> Result<BedrockTable, BedrockError> {
    if !path.exists() {
        return Err(BedrockError::ResourceNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| BedrockError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&content).map_err(|source| BedrockError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut table = BedrockTable::new();
    let mut skipped = 0usize;
    for (index, value) in records.into_iter().enumerate() {
        match serde_json::from_value::<BedrockRecord>(value) {
            Ok(record) => {
                table
                    .entry(record.name.clone())
                    .or_insert_with(|| BedrockEntry::new(record.name, record.id));
            }
            Err(err) => {
                warn!("Skipping malformed record #{index} in {path:?}: {err}");
                skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} Bedrock entries from {path:?} ({skipped} malformed)",
        table.len()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scratch_dir;

    #[test]
    fn first_occurrence_wins() {
        let dir = scratch_dir("bedrock-dupes");
        let path = dir.join("runtime_item_ids.json");
        fs::write(
            &path,
            r#"[
                { "name": "minecraft:planks", "id": 5 },
                { "name": "minecraft:stone", "id": 1 },
                { "name": "minecraft:planks", "id": 99 }
            ]"#,
        )
        .unwrap();

        let table = load_bedrock_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["minecraft:planks"], BedrockEntry::new("minecraft:planks", 5));
        assert_eq!(table["minecraft:planks"].data, 0);
        assert_eq!(table["minecraft:stone"].runtime_id, 1);
    }

    #[test]
    fn malformed_records_are_dropped() {
        let dir = scratch_dir("bedrock-malformed");
        let path = dir.join("runtime_block_ids.json");
        fs::write(
            &path,
            r#"[
                { "name": "minecraft:wool", "id": 35, "data": 3 },
                { "name": "minecraft:nameless" },
                { "id": 12 },
                { "name": 4, "id": 4 },
                "not even an object",
                { "name": "minecraft:stained_glass", "id": 241 }
            ]"#,
        )
        .unwrap();

        let table = load_bedrock_table(&path).unwrap();
        let names: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(names, ["minecraft:wool", "minecraft:stained_glass"]);
        // data from the file is ignored
        assert_eq!(table["minecraft:wool"].data, 0);
    }

    #[test]
    fn negative_runtime_ids_are_kept() {
        let dir = scratch_dir("bedrock-negative");
        let path = dir.join("runtime_item_ids.json");
        fs::write(&path, r#"[ { "name": "minecraft:kelp", "id": -138 } ]"#).unwrap();

        let table = load_bedrock_table(&path).unwrap();
        assert_eq!(table["minecraft:kelp"].runtime_id, -138);
    }

    #[test]
    fn missing_table_is_fatal() {
        let dir = scratch_dir("bedrock-missing");
        assert!(matches!(
            load_bedrock_table(&dir.join("runtime_item_ids.json")),
            Err(BedrockError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn non_array_is_malformed() {
        let dir = scratch_dir("bedrock-object");
        let path = dir.join("runtime_item_ids.json");
        fs::write(&path, r#"{ "name": "minecraft:stone", "id": 1 }"#).unwrap();
        assert!(matches!(
            load_bedrock_table(&path),
            Err(BedrockError::Malformed { .. })
        ));
    }
}

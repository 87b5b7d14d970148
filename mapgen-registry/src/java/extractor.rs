use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, info};
use mapgen_core::{JavaEntry, JavaTable};
use serde::ser::{SerializeSeq, Serializer};

use super::{JavaRegistry, RegistryError};

/// Builds the in-memory table for `registry` and writes the same entries to `audit_path`
/// as a JSON array of `{ identifier, protocol_id }`.
///
/// Entries whose protocol id can't be resolved are left out of both.
pub fn extract<R: JavaRegistry>(registry: &R, audit_path: &Path) -> Result<JavaTable, RegistryError> {
    let io_error = |source| RegistryError::Io {
        path: audit_path.to_path_buf(),
        source,
    };
    let json_error = |source| RegistryError::Json {
        path: audit_path.to_path_buf(),
        source,
    };

    let file = File::create(audit_path).map_err(io_error)?;
    let mut serializer = serde_json::Serializer::pretty(BufWriter::new(file));
    let mut seq = Serializer::serialize_seq(&mut serializer, None).map_err(json_error)?;

    let mut table = JavaTable::new();
    let mut skipped = 0usize;
    for key in registry.keys() {
        let Some(protocol_id) = registry.protocol_id(key) else {
            debug!("Skipping {key}, it has no protocol id");
            skipped += 1;
            continue;
        };
        let entry = JavaEntry::new(key.to_string(), protocol_id);
        if table.contains_key(&entry.identifier) {
            debug!("Skipping duplicate registry key {key}");
            continue;
        }
        seq.serialize_element(&entry).map_err(json_error)?;
        table.insert(entry.identifier.clone(), entry);
    }

    seq.end().map_err(json_error)?;
    serializer.into_inner().flush().map_err(io_error)?;

    info!(
        "Extracted {} Java entries into {audit_path:?} ({skipped} unresolved)",
        table.len()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mapgen_core::ResourceLocation;

    use super::*;
    use crate::{scratch_dir, Registry};

    #[test]
    fn audit_file_matches_table() {
        let dir = scratch_dir("extract");
        let audit = dir.join("java_items.json");
        let registry: Registry = [
            (ResourceLocation::vanilla("stone"), Some(1)),
            (ResourceLocation::vanilla("air"), None),
            (ResourceLocation::new("create", "cogwheel"), Some(1200)),
        ]
        .into_iter()
        .collect();

        let table = extract(&registry, &audit).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table["minecraft:stone"], JavaEntry::new("minecraft:stone", 1));
        assert_eq!(table["create:cogwheel"].protocol_id, 1200);
        assert!(!table.contains_key("minecraft:air"));

        let written: Vec<JavaEntry> =
            serde_json::from_str(&fs::read_to_string(&audit).unwrap()).unwrap();
        let in_memory: Vec<JavaEntry> = table.values().cloned().collect();
        assert_eq!(written, in_memory);
    }

    #[test]
    fn audit_file_is_replaced() {
        let dir = scratch_dir("extract-replace");
        let audit = dir.join("java_blocks.json");
        fs::write(&audit, "this is much longer than an empty json array will ever be").unwrap();

        let table = extract(&Registry::default(), &audit).unwrap();

        assert!(table.is_empty());
        let written: Vec<JavaEntry> =
            serde_json::from_str(&fs::read_to_string(&audit).unwrap()).unwrap();
        assert!(written.is_empty());
    }
}

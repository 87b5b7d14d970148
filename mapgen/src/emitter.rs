use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;
use mapgen_core::{ConversionTable, OutputRecord};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Couldn't write {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't serialize {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One record per (Java entry, Bedrock entry) pair, keeping the per-entry order.
pub fn flatten(table: &ConversionTable) -> Vec<OutputRecord> {
    table
        .iter()
        .flat_map(|(java, conversions)| {
            conversions
                .iter()
                .map(move |bedrock| OutputRecord::new(java, bedrock))
        })
        .collect()
}

/// Replaces whatever is at `path` with `records` as a json array.
pub fn write_json_array<T: Serialize>(path: &Path, records: &[T]) -> Result<(), EmitError> {
    let file = File::create(path).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| EmitError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the flattened `table` to `path`, returns how many records were written.
pub fn emit(table: &ConversionTable, path: &Path) -> Result<usize, EmitError> {
    let records = flatten(table);
    write_json_array(path, &records)?;
    info!(
        "Wrote {} mappings for {} Java entries to {path:?}",
        records.len(),
        table.len()
    );
    Ok(records.len())
}

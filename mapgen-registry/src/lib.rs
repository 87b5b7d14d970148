//! Input side of the generator: the Java registries and the Bedrock runtime id tables.

pub mod bedrock;
pub mod java;

pub use bedrock::{load_bedrock_table, BedrockError};
pub use java::{extractor::extract, JavaRegistry, Registry, RegistryError};

#[cfg(test)]
pub(crate) fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("mapgen-registry-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

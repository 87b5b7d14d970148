pub mod emitter;
pub mod error;
pub mod pipeline;
pub mod reconciler;

pub use pipeline::{Pipeline, PipelineContext, PipelineError, Summary};
pub use reconciler::TableKind;

#[cfg(test)]
pub(crate) fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("mapgen-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

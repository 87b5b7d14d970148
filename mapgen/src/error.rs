use log::log;
use mapgen_registry::BedrockError;
use std::fmt::Display;

use crate::pipeline::PipelineError;

/// Exit code when configuration or inputs can't be read.
pub const INPUT_EXIT_CODE: i32 = 2;
/// Exit code when an output file can't be written.
pub const OUTPUT_EXIT_CODE: i32 = 1;

/// Errors that end a run.
pub trait MappingsError: std::error::Error + Display {
    fn log(&self) {
        log!(self.severity(), "{}", self.to_string());
    }

    fn severity(&self) -> log::Level;

    /// Process exit code for this failure.
    fn exit_code(&self) -> i32;
}

impl MappingsError for PipelineError {
    fn log(&self) {
        log!(self.severity(), "{self}");
        if let Self::Bedrock(BedrockError::ResourceNotFound(_)) = self {
            log!(
                self.severity(),
                "The Bedrock runtime id tables ship with the generator, check the [bedrock] paths in mapgen.toml"
            );
        }
    }

    fn severity(&self) -> log::Level {
        log::Level::Error
    }

    fn exit_code(&self) -> i32 {
        match self {
            Self::Bedrock(_) | Self::Registry(_) => INPUT_EXIT_CODE,
            Self::Emit(_) | Self::OutputDirectory { .. } => OUTPUT_EXIT_CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mapgen_registry::RegistryError;

    use super::*;
    use crate::emitter::EmitError;

    #[test]
    fn inputs_exit_two_outputs_exit_one() {
        let missing = PathBuf::from("runtime_block_ids.json");
        assert_eq!(
            PipelineError::Bedrock(BedrockError::ResourceNotFound(missing.clone())).exit_code(),
            INPUT_EXIT_CODE
        );
        assert_eq!(
            PipelineError::Registry(RegistryError::NotFound(missing.clone())).exit_code(),
            INPUT_EXIT_CODE
        );

        let io = || std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        assert_eq!(
            PipelineError::OutputDirectory {
                path: missing.clone(),
                source: io(),
            }
            .exit_code(),
            OUTPUT_EXIT_CODE
        );
        assert_eq!(
            PipelineError::Emit(EmitError::Io {
                path: missing,
                source: io(),
            })
            .exit_code(),
            OUTPUT_EXIT_CODE
        );
    }
}

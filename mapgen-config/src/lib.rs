use log::warn;
use logging::LoggingConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub mod logging;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file at {path:?}. Reason: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Couldn't parse config at {path:?}. Reason: {source}. This is probably caused by a config update, just delete the old config and start again")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Where the generator reads its inputs from and writes its tables to.
///
/// Output file names are fixed, only the directory they land in can be changed.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MappingsConfiguration {
    pub java: JavaConfig,
    pub bedrock: BedrockConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Extracted Java registries.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct JavaConfig {
    pub items: PathBuf,
    pub blocks: PathBuf,
}

impl Default for JavaConfig {
    fn default() -> Self {
        Self {
            items: PathBuf::from("assets/java/items.json"),
            blocks: PathBuf::from("assets/java/blocks.json"),
        }
    }
}

/// Bedrock runtime id tables.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BedrockConfig {
    pub items: PathBuf,
    pub blocks: PathBuf,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            items: PathBuf::from("assets/bedrock/runtime_item_ids.json"),
            blocks: PathBuf::from("assets/bedrock/runtime_block_ids.json"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

pub trait LoadTomlConfiguration {
    fn load() -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        Self::load_from(Self::get_path())
    }

    /// Reads the config at `path`, or writes the defaults there if there is none yet.
    fn load_from(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config = if path.exists() {
            let file_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!("Couldn't write default config to {path:?}. Reason: {err}");
                    }
                }
                Err(err) => warn!("Couldn't serialize default config. Reason: {err}"),
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadTomlConfiguration for MappingsConfiguration {
    fn get_path() -> &'static Path {
        Path::new("mapgen.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("java.items", &self.java.items),
            ("java.blocks", &self.java.blocks),
            ("bedrock.items", &self.bedrock.items),
            ("bedrock.blocks", &self.bedrock.blocks),
        ];
        for (key, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!("{key} must not be empty")));
            }
        }
        if self.output.directory.is_file() {
            return Err(ConfigError::Invalid(format!(
                "output.directory {:?} is a file",
                self.output.directory
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mapgen-config-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_config_writes_defaults() {
        let dir = scratch_dir("defaults");
        let path = dir.join("mapgen.toml");

        let config = MappingsConfiguration::load_from(&path).unwrap();
        assert_eq!(config, MappingsConfiguration::default());
        assert!(path.exists());

        // the written defaults load back unchanged
        let reloaded = MappingsConfiguration::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let dir = scratch_dir("partial");
        let path = dir.join("mapgen.toml");
        fs::write(&path, "[output]\ndirectory = \"out\"\n").unwrap();

        let config = MappingsConfiguration::load_from(&path).unwrap();
        assert_eq!(config.output.directory, PathBuf::from("out"));
        assert_eq!(config.java, JavaConfig::default());
        assert_eq!(config.bedrock, BedrockConfig::default());
    }

    #[test]
    fn rejects_empty_paths() {
        let dir = scratch_dir("empty");
        let path = dir.join("mapgen.toml");
        fs::write(&path, "[bedrock]\nitems = \"\"\n").unwrap();

        assert!(matches!(
            MappingsConfiguration::load_from(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn broken_toml_is_an_error() {
        let dir = scratch_dir("broken");
        let path = dir.join("mapgen.toml");
        fs::write(&path, "[output\n").unwrap();

        assert!(matches!(
            MappingsConfiguration::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}

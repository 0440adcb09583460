use std::{fs, path::Path};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

pub mod commands;
pub mod logging;

pub use commands::EnchantCommandConfig;
pub use logging::LoggingConfig;

const CONFIG_FILE: &str = "tim.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't access config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Couldn't parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Couldn't serialize default config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top level of `tim.toml`.
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EnchanterConfig {
    pub enchant: EnchantCommandConfig,
    pub logging: LoggingConfig,
}

pub trait LoadConfiguration: Sized + Default + Serialize + DeserializeOwned {
    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;

    /// Reads the file below `config_dir`, writing the defaults first when it
    /// does not exist yet.
    fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(Self::get_path());
        let display = path.display().to_string();
        let io_error = |source| ConfigError::Io {
            path: display.clone(),
            source,
        };

        let config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(io_error)?;
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: display.clone(),
                source,
            })?
        } else {
            let config = Self::default();
            fs::create_dir_all(config_dir).map_err(io_error)?;
            fs::write(&path, toml::to_string(&config)?).map_err(io_error)?;
            log::info!("Created default config at {display}");
            config
        };

        config.validate()?;
        Ok(config)
    }
}

impl LoadConfiguration for EnchanterConfig {
    fn get_path() -> &'static Path {
        Path::new(CONFIG_FILE)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let node = &self.enchant.permission;
        if node.is_empty() || node.split('.').any(str::is_empty) {
            return Err(ConfigError::Invalid(format!(
                "enchant.permission {node:?} is not a dotted permission node"
            )));
        }
        let levels = ["off", "error", "warn", "info", "debug", "trace"];
        if !levels.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level {:?} must be one of {levels:?}",
                self.logging.level
            )));
        }
        Ok(())
    }
}

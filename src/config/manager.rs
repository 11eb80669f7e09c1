use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::config::{ConfigError, InsightConfig};

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "FINSIGHT_CONFIG";
const CONFIG_DIR_NAME: &str = "finsight";
const CONFIG_FILE_NAME: &str = "config.json";

/// Locates and reads [`InsightConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Resolves the path from `FINSIGHT_CONFIG`, falling back to the platform config directory.
    pub fn from_env() -> Self {
        if let Some(custom) = env::var_os(CONFIG_ENV_VAR) {
            return Self::new(PathBuf::from(custom));
        }
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the configuration; a missing file yields the defaults.
    pub fn load(&self) -> Result<InsightConfig, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(InsightConfig::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        let config: InsightConfig =
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.validate()?;
        tracing::debug!(path = %self.config_path.display(), "loaded config");
        Ok(config)
    }
}

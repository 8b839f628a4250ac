use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;
#[cfg(test)]
use super::app_config::DEFAULT_ACCENT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory available; pass --config")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Reads and writes the `config.toml` of one installation.
#[derive(Debug, Clone)]
pub struct StorageManager {
    config_path: PathBuf,
}

impl StorageManager {
    /// Uses `path_override` when given, the platform config directory otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] when no override is given and the
    /// platform has no config directory.
    pub fn new(path_override: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path_override {
            Some(path) => path.to_path_buf(),
            None => AppConfig::default_config_path().ok_or(ConfigError::NoConfigDir)?,
        };
        Ok(Self::at(config_path))
    }

    #[must_use]
    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration, writing the defaults on first run.
    ///
    /// A file that does not parse is left untouched and the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or the defaults
    /// cannot be written.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.config_path.exists() {
            info!(path = %self.config_path.display(), "Writing default configuration");
            let config = AppConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&self.config_path).map_err(|source| self.io(source))?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                debug!(path = %self.config_path.display(), "Configuration loaded");
                Ok(config)
            }
            Err(e) => {
                warn!(path = %self.config_path.display(), error = %e, "Invalid configuration, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    /// Atomically replaces the file with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on serialization or file system failures.
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;

        let parent = self
            .config_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|source| self.io(source))?;

        let mut temp_file =
            tempfile::NamedTempFile::new_in(parent).map_err(|source| self.io(source))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|source| self.io(source))?;
        temp_file
            .persist(&self.config_path)
            .map_err(|e| self.io(e.error))?;

        Ok(())
    }

    fn io(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.config_path.clone(),
            source,
        }
    }
}

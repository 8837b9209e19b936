//! Engine configuration on disk
//!
//! YAML at `~/.config/godel/config.yaml` unless a path is given. A missing
//! file is not an error: the defaults apply.

use godel_core::EngineConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_DIR: &str = "godel";
pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Default config path under the platform config directory
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn default_location() -> Self {
        Self { path: default_path() }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<EngineConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(EngineConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: EngineConfig = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %self.path.display(),
            profile = config.profile.name(),
            extra_symbols = config.extra_symbols.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Write to a temp file first, then rename
    pub fn save(&self, config: &EngineConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(config)?;
        let temp_path = self.path.with_extension("yaml.tmp");
        std::fs::write(&temp_path, &content)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

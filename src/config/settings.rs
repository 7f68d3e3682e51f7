//! Application configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Layout file used when none is given on the command line
    #[serde(default)]
    pub layout_file: Option<PathBuf>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

/// Platform configuration directory for dashkit
pub fn config_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "dashkit", "dashkit")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(dirs.config_dir().to_path_buf())
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let config_path = config_dir()?.join("config.json");

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Layout file to use: the configured one, else `layout.json` in the config dir
    pub fn layout_path(&self) -> Result<PathBuf> {
        match &self.layout_file {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join("layout.json")),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            layout_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_configured_layout_path_wins() {
        let config = AppConfig {
            layout_file: Some(PathBuf::from("/tmp/board.json")),
            ..Default::default()
        };
        assert_eq!(config.layout_path().unwrap(), PathBuf::from("/tmp/board.json"));
    }
}

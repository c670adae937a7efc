//! Configuration management for itemprops CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Raw dataset read by `prune` when no path is given
pub const DEFAULT_INPUT: &str = "data/items_weapon.json";

/// Cleaned dataset written by `prune` and read by `scan`
pub const DEFAULT_CLEANED: &str = "data/items_weapon_cleaned.json";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub cleaned: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("itemprops");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Prune input: flag, then config, then default
    pub fn resolve_input(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    /// Cleaned dataset path: flag, then config, then default
    pub fn resolve_cleaned(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.cleaned.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CLEANED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_is_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            input: Some(PathBuf::from("raw.json")),
            cleaned: None,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "input = [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_resolve_order() {
        let config = Config {
            input: Some(PathBuf::from("configured.json")),
            cleaned: None,
        };

        assert_eq!(
            config.resolve_input(Some(PathBuf::from("flag.json"))),
            PathBuf::from("flag.json")
        );
        assert_eq!(config.resolve_input(None), PathBuf::from("configured.json"));
        assert_eq!(config.resolve_cleaned(None), PathBuf::from(DEFAULT_CLEANED));
    }
}

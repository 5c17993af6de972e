//! Default paths and persisted configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::grammar::ParserConfig;

/// Get the configuration directory for hebphonics
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join("hebphonics"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join("config.json"))
}

/// Get the REPL history file path
pub fn history_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("history.txt"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Rules enabled or disabled for every run
    #[serde(flatten)]
    pub parser: ParserConfig,
    /// Syllabify in strict mode by default
    pub strict: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from the default or a custom path
    ///
    /// A missing file is an empty configuration.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default or a custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path_with_override(custom_path)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, enable: &[String], disable: &[String]) -> ParserConfig {
        let overrides = ParserConfig::new(enable.iter().cloned(), disable.iter().cloned());
        self.parser.clone().merge(&overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_config_path() {
        assert!(validate_config_path(Path::new("a/config.json")).is_ok());
        assert!(validate_config_path(Path::new("config.toml")).is_err());
        assert!(validate_config_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        assert_eq!(PersistentConfig::load_from(Some(&path)).unwrap(), PersistentConfig::default());

        let config = PersistentConfig {
            parser: ParserConfig::default().disable("glide-av"),
            strict: Some(true),
        };
        config.save_to(Some(&path)).unwrap();
        assert_eq!(PersistentConfig::load_from(Some(&path)).unwrap(), config);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"disabled\""));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = PersistentConfig {
            parser: ParserConfig::default().disable("glide-av"),
            strict: None,
        };
        let merged = config.merge_with_cli(&["glide-av".to_string()], &[]);
        assert!(merged.allows("glide-av", true));
    }
}

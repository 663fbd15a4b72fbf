//! Persistent user preferences.
//!
//! Stored as `config.toml` in the platform config directory (or the directory
//! named by `TOKENFORGE_CONFIG_DIR`) and read once per command.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::services::fonts;

/// Export preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported files are written to when `--out-dir` is omitted
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Design system generation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Font family used instead of a random pick (must be a known font)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_font: Option<String>,
    /// Seed used when `--seed` is omitted, for reproducible output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// TokenForge preferences file.
///
/// # File Location
///
/// - `$TOKENFORGE_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/TokenForge/config.toml`
/// - macOS: `~/Library/Application Support/TokenForge/config.toml`
/// - Windows: `%APPDATA%\TokenForge\config.toml`
///
/// # Validation
///
/// - `default_font` must be one of the fixed font families
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Config {
    /// Default preferences: export to the working directory, random font and seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a preferences file has been written yet.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path, honouring `TOKENFORGE_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Path of `config.toml` inside [`Config::config_dir`].
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Reads the preferences file, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Writes the preferences file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// The content goes to a sibling `.toml.tmp` file first and is renamed
    /// into place, so readers never see a half-written file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write {}",
            temp_path.display()
        ))?;

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e).context(format!(
                "Failed to move config into place at {}",
                path.display()
            ));
        }

        Ok(())
    }

    /// Rejects a default font outside the fixed font list.
    pub fn validate(&self) -> Result<()> {
        if let Some(font) = &self.generator.default_font {
            if fonts::find_font(font).is_none() {
                anyhow::bail!(
                    "Unknown default font '{font}'. Run `fonts` to list the available families"
                );
            }
        }

        Ok(())
    }

    /// The configured default font, resolved to its full stack.
    #[must_use]
    pub fn default_font(&self) -> Option<&'static str> {
        self.generator.default_font.as_deref().and_then(fonts::find_font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert_eq!(config.generator.default_font, None);
        assert_eq!(config.generator.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_font() {
        let mut config = Config::new();
        config.generator.default_font = Some("Comic Sans".to_string());
        assert!(config.validate().is_err());

        config.generator.default_font = Some("lato".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(config.default_font(), Some("Lato, sans-serif"));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.export.output_dir = PathBuf::from("/tmp/tokens");
        config.generator.seed = Some(42);
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::create_dir(&config_file).unwrap();
        fs::write(config_file.join("keep"), "").unwrap();

        assert!(Config::new().save_to(&config_file).is_err());
        assert!(!temp_dir.path().join("config.toml.tmp").exists());
        assert!(config_file.is_dir());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[generator]\nseed = 7\n").unwrap();

        let config = Config::load_from(&config_file).unwrap();
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.export.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[generator]\ndefault_font = \"Papyrus\"\n").unwrap();
        assert!(Config::load_from(&config_file).is_err());

        fs::write(&config_file, "not toml = = =").unwrap();
        assert!(Config::load_from(&config_file).is_err());
    }
}

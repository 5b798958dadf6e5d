//! Global rsvp configuration.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::{RsvpError, RsvpResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/rsvp";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Configuration at ~/.config/rsvp/config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct RsvpConfig {
    /// Where the event and response files live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for RsvpConfig {
    fn default() -> Self {
        RsvpConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl RsvpConfig {
    pub fn config_path() -> RsvpResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RsvpError::Config("Could not determine config directory".into()))?
            .join("rsvp");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, creating a commented default if there is none.
    pub fn load() -> RsvpResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::from_path(&config_path)
    }

    pub fn from_path(path: &Path) -> RsvpResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| RsvpError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RsvpError::Config(e.to_string()))
    }

    pub fn from_toml(content: &str) -> RsvpResult<Self> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .map_err(|e| RsvpError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RsvpError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RsvpResult<()> {
        let contents = format!(
            "\
# rsvp configuration

# Where events and guest responses are stored:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RsvpError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RsvpError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_default_dir() {
        let config = RsvpConfig::from_toml("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_data_dir_override() {
        let config = RsvpConfig::from_toml("data_dir = \"/tmp/rsvp-data\"").unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/rsvp-data"));
    }

    #[test]
    fn test_default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rsvp/config.toml");

        RsvpConfig::create_default_config(&path).unwrap();
        let config = RsvpConfig::from_path(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }
}

//! Global SmartCal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{SmartCalError, SmartCalResult};

static DEFAULT_DATA_DIR: &str = "~/.smartcal";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_seed_demo_events() -> bool {
    true
}

/// Configuration at ~/.config/smartcal/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SmartCalConfig {
    /// Where persisted state lives
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Start with the sample events when nothing has been saved yet
    #[serde(default = "default_seed_demo_events")]
    pub seed_demo_events: bool,
}

impl Default for SmartCalConfig {
    fn default() -> Self {
        SmartCalConfig {
            data_dir: default_data_dir(),
            seed_demo_events: default_seed_demo_events(),
        }
    }
}

impl SmartCalConfig {
    pub fn config_path() -> SmartCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SmartCalError::Config("Could not determine config directory".into()))?
            .join("smartcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file first if
    /// none exists.
    pub fn load() -> SmartCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::from_file(&config_path)
    }

    /// Read config from `path`. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> SmartCalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| SmartCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SmartCalError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn to_toml(&self) -> SmartCalResult<String> {
        toml::to_string_pretty(self).map_err(|e| SmartCalError::Config(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> SmartCalResult<()> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| SmartCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SmartCalResult<()> {
        let contents = format!(
            "\
# SmartCal configuration

# Where events and preferences are stored:
# data_dir = \"{}\"

# Start with sample events until something is saved:
# seed_demo_events = true
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SmartCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SmartCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SmartCalConfig::from_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, SmartCalConfig::default());
    }

    #[test]
    fn commented_default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smartcal").join("config.toml");

        SmartCalConfig::create_default_config(&path).unwrap();

        assert!(path.exists());
        assert_eq!(SmartCalConfig::from_file(&path).unwrap(), SmartCalConfig::default());
    }

    #[test]
    fn values_are_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/var/lib/smartcal\"\nseed_demo_events = false\n").unwrap();

        let config = SmartCalConfig::from_file(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/var/lib/smartcal"));
        assert!(!config.seed_demo_events);
    }

    #[test]
    fn save_round_trips_and_omits_default_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = SmartCalConfig {
            seed_demo_events: false,
            ..SmartCalConfig::default()
        };

        config.save(&path).unwrap();

        assert!(!config.to_toml().unwrap().contains("data_dir"));
        assert_eq!(SmartCalConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn tilde_is_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = SmartCalConfig::default();
        assert_eq!(config.data_path(), home.join(".smartcal"));
    }
}

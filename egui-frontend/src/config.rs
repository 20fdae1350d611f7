//! # App Configuration
//!
//! Optional window settings read from a YAML file. The file is looked up at
//! `$CHORE_TRACKER_CONFIG` if set, otherwise at `config.yaml` in the platform
//! config directory. A missing file means defaults.
//!
//! ```yaml
//! window_title: "Kind Chore Club"
//! window_width: 1100.0
//! window_height: 800.0
//! ```

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "CHORE_TRACKER_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub min_window_width: f32,
    pub min_window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Kind Chore Club".to_string(),
            window_width: 1100.0,
            window_height: 800.0,
            min_window_width: 600.0,
            min_window_height: 500.0,
        }
    }
}

impl AppConfig {
    /// Load config from the env override or the platform config dir
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&yaml_content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn from_yaml(yaml_content: &str) -> Result<Self, serde_yaml::Error> {
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml_content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [self.window_width, self.window_height, self.min_window_width, self.min_window_height];
        if sizes.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("org", "kindchoreclub", "KindChoreClub")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = AppConfig::load_from(&temp_dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "window_title: \"Chore Time\"\nwindow_width: 900.0\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.window_title, "Chore Time");
        assert_eq!(config.window_width, 900.0);
        assert_eq!(config.window_height, 800.0);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "window_width: [not, a, number]\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_non_positive_size_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "window_height: 0.0\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWindowSize { .. }));
    }
}

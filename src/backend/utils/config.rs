use crate::backend::session::store::DEFAULT_SESSION_KEY;
use crate::backend::utils::paths::{get_config_path, get_session_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "ECOSPECHE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// When false the session lives in memory only.
    pub persist_session: bool,
    /// Overrides the platform session directory.
    pub directory: Option<PathBuf>,
    pub session_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub toast_duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `env_logger` filter, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ECOSPECHE".to_string(),
            width: 1280.0,
            height: 832.0,
            resizable: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist_session: true,
            directory: None,
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl StorageConfig {
    /// Directory for the session file, if one can be determined.
    pub fn session_dir(&self) -> Option<PathBuf> {
        self.directory.clone().or_else(|| get_session_dir().ok())
    }
}

impl AppConfig {
    /// Loads the config from `ECOSPECHE_CONFIG` or the data directory.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => match get_config_path() {
                Ok(path) => path,
                Err(_) => return Ok(Self::default()),
            },
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load_from(&temp.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.session_key, "ecospeche_user");
        assert_eq!(config.ui.toast_duration_ms, 5000);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"storage": {"persist_session": false}, "logging": {"filter": "debug"}}"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();

        assert!(!config.storage.persist_session);
        assert_eq!(config.storage.session_key, "ecospeche_user");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn broken_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ window: ").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_directory_wins() {
        let storage = StorageConfig {
            directory: Some(PathBuf::from("/tmp/ecospeche-test")),
            ..Default::default()
        };
        assert_eq!(storage.session_dir(), Some(PathBuf::from("/tmp/ecospeche-test")));
    }
}

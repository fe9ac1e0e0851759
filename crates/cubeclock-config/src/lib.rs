//! Configuration file support for cubeclock.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/cubeclock/config.toml` on Linux). Every key is
//! optional; a missing file yields the defaults.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use cubeclock_core::CubeView;
use directories::ProjectDirs;
use serde::Deserialize;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CUBECLOCK_CONFIG";

/// Errors raised while loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Path of the offending file.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial cube view.
    pub view: CubeView,
    /// Sweep a highlight across the stickers every minute.
    pub scan_highlight: bool,
    /// Tilt the cube as the minutes pass.
    pub rotation: bool,
    /// Read the clock in UTC instead of local time.
    pub utc: bool,
    /// Logging settings.
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view: CubeView::default(),
            scan_highlight: true,
            rotation: true,
            utc: false,
            log: LogConfig::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `"debug"` or `"cubeclock=trace"`.
    pub level: Option<String>,
    /// Log file path. Defaults to `cubeclock.log` in the data directory.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "cubeclock")
}

/// Location of the config file, honouring [`CONFIG_PATH_ENV`].
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Default log file location in the platform data directory.
pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("cubeclock.log"))
}

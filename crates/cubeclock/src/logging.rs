//! File logging setup.
//!
//! The terminal is owned by the UI, so log output goes to a file. When no
//! file can be opened a bare subscriber is installed and events are dropped.

use std::{
    fs::{self, File, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use cubeclock_config::{LogConfig, default_log_path};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a `tracing` filter; overrides the config.
const LOG_FILTER_ENV: &str = "CUBECLOCK_LOG";

/// Filter used when neither the environment nor the config sets one.
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
pub fn init(config: &LogConfig) {
    let env_filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(config.level.as_deref().unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (log_file, warnings) = open_log_file(config);

    if let Some((path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        for warning in warnings {
            tracing::warn!("{warning}");
        }
        tracing::debug!("logging to {}", path.display());
        return;
    }

    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file(config: &LogConfig) -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates(config) {
        if let Some(parent) = candidate.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => warnings.push(format!(
                "failed to open log file {}: {e}",
                candidate.display()
            )),
        }
    }

    (None, warnings)
}

/// Configured path first, then the data directory, then the working directory.
fn log_file_candidates(config: &LogConfig) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(file) = &config.file {
        candidates.push(file.clone());
    }
    if let Some(path) = default_log_path() {
        candidates.push(path);
    }
    candidates.push(PathBuf::from("cubeclock.log"));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_file_comes_first() {
        let config = LogConfig {
            level: None,
            file: Some(PathBuf::from("/tmp/custom.log")),
        };
        let candidates = log_file_candidates(&config);
        assert_eq!(candidates[0], PathBuf::from("/tmp/custom.log"));
        assert_eq!(candidates.last(), Some(&PathBuf::from("cubeclock.log")));
    }

    #[test]
    fn test_working_directory_fallback_always_present() {
        let candidates = log_file_candidates(&LogConfig::default());
        assert_eq!(candidates.last(), Some(&PathBuf::from("cubeclock.log")));
    }
}

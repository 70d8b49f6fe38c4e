// Log setup. The terminal belongs to the UI, so logs only ever go to a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::Level;

#[cfg(feature = "dev-logging")]
const DEV_LOG_PATH: &str = "/tmp/sjsuconnect_debug.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLevel(String),

    #[error("failed to open log file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global logger is already installed")]
    AlreadyInstalled,
}

pub fn parse_level(level: &str) -> Result<Level, LoggingError> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

/// Pick the log destination: explicit file first, then the dev log when that feature is on.
pub fn resolve_log_file(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        return Some(path.to_path_buf());
    }

    #[cfg(feature = "dev-logging")]
    {
        Some(PathBuf::from(DEV_LOG_PATH))
    }
    #[cfg(not(feature = "dev-logging"))]
    {
        None
    }
}

/// Install the global subscriber. Returns `Ok(None)` when no destination is configured.
pub fn init(file: Option<&Path>, level: &str) -> Result<Option<PathBuf>, LoggingError> {
    let level = parse_level(level)?;
    let Some(path) = resolve_log_file(file) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LoggingError::Open {
            path: path.clone(),
            source,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::Open {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    Ok(Some(path))
}

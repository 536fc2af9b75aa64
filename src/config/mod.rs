//! Configuration loading.
//!
//! The config is a YAML document with a `vars` mapping and an ordered list of
//! `requests`. When no file is given, or the given file does not exist, the
//! loader falls back to `courier.yaml` and then `.courier/config.yaml` in the
//! working directory.

pub mod schema;

pub use schema::{ConfigLint, CourierConfig};

use crate::variables::JsonKind;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default config file name in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "courier.yaml";

/// Config file inside the project config folder.
pub const DEFAULT_CONFIG_FOLDER_FILE: &str = ".courier/config.yaml";

/// Errors that can occur while locating or loading the config.
#[derive(Debug)]
pub enum ConfigError {
    /// None of the candidate paths exists.
    NotFound { tried: Vec<PathBuf> },

    Io { path: PathBuf, source: io::Error },

    /// The document is not valid YAML or does not match the schema.
    Parse {
        path: Option<PathBuf>,
        source: serde_yaml::Error,
    },

    /// `vars` is present but is not a mapping.
    InvalidVars { kind: JsonKind },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound { tried } => {
                let tried: Vec<String> = tried.iter().map(|p| p.display().to_string()).collect();
                write!(f, "configuration file not found (tried {})", tried.join(", "))
            }
            ConfigError::Io { path, source } => {
                write!(f, "failed reading {}: {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid config {}: {}", path.display(), source),
            ConfigError::Parse { path: None, source } => write!(f, "invalid config: {}", source),
            ConfigError::InvalidVars { kind } => {
                write!(f, "`vars` must be a mapping of names to values, got {}", kind)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Picks the config file to load.
///
/// Candidates, in order: `explicit` (if given), `courier.yaml`,
/// `.courier/config.yaml`. Relative paths are taken from `base_dir`.
pub fn locate_config(explicit: Option<&Path>, base_dir: &Path) -> Result<PathBuf, ConfigError> {
    let candidates: Vec<PathBuf> = explicit
        .map(|p| base_dir.join(p))
        .into_iter()
        .chain([
            base_dir.join(DEFAULT_CONFIG_FILE),
            base_dir.join(DEFAULT_CONFIG_FOLDER_FILE),
        ])
        .collect();

    for candidate in &candidates {
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
        log::debug!("no config at {}", candidate.display());
    }

    Err(ConfigError::NotFound { tried: candidates })
}

/// Parses a config document from YAML text.
pub fn parse_config(yaml: &str) -> Result<CourierConfig, ConfigError> {
    let config: CourierConfig =
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse { path: None, source })?;
    config.environment()?;
    Ok(config)
}

/// Reads and parses the config file at `path`.
pub fn load_config(path: &Path) -> Result<CourierConfig, ConfigError> {
    let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&yaml).map_err(|err| match err {
        ConfigError::Parse { source, .. } => ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        },
        other => other,
    })
}

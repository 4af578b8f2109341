use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::core::CouplingmapConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".couplingmap.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

pub fn parse_config(contents: &str) -> std::result::Result<CouplingmapConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load a config file named explicitly; any failure is fatal
pub fn load_config_from_path(path: &Path) -> Result<CouplingmapConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    let config = parse_config(&contents)
        .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// A discovered config file: missing is silent, unreadable or invalid warns
fn try_load_config(path: &Path) -> Option<CouplingmapConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "Failed to read config file");
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            debug!(path = %path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
            None
        }
    }
}

/// `start` and up to `max_depth - 1` of its ancestors, nearest first
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.couplingmap.toml`
pub fn load_config_from(start: PathBuf) -> CouplingmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config(&path))
        .unwrap_or_else(|| {
            debug!(
                depth = MAX_TRAVERSAL_DEPTH,
                "No config found, using defaults"
            );
            CouplingmapConfig::default()
        })
}

/// Search from the current directory
pub fn load_config() -> CouplingmapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!(error = %e, "Failed to get current directory, using default config");
            CouplingmapConfig::default()
        }
    }
}

// src/config/loader.rs
use crate::config::{CONFIG_FILE_NAME, Config, ConfigFile};
use crate::error::{AnalyzerError, Result};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Looks for a `bookstat.toml` file starting from the given directory and
/// checking parent directories until one is found.
///
/// # Arguments
///
/// * `dir` - The starting directory of the search
///
/// # Returns
///
/// * `Some(PathBuf)` with the first configuration file found, `None` otherwise
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Reads and parses a single configuration file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown keys
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|source| AnalyzerError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| AnalyzerError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the run configuration from the defaults and, when present, a
/// configuration file.
///
/// An explicitly named file must exist. Without one, the search starts at
/// `start_dir`; finding nothing leaves the defaults untouched.
///
/// # Errors
///
/// Returns an error if the chosen configuration file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    let Some(path) = path else {
        debug!("No {CONFIG_FILE_NAME} found above {}, using defaults", start_dir.display());
        return Ok(Config::default());
    };

    debug!("Loading configuration from {}", path.display());
    let file = load_config_file(&path)?;
    Ok(Config::default().merge(file))
}

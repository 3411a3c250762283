//! Locate and load `~/.config/git-ai-commit-genie/.env`.
//!
//! The file is loaded into the process environment before any flag or
//! environment resolution runs. Paths are validated before any file I/O.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ConfigError;

use super::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// What the loader ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The config file at this path was loaded.
    File(PathBuf),
    /// The home directory could not be resolved; nothing was loaded.
    NoHomeDirectory,
}

/// Load the config file from the current user's home directory.
pub fn load() -> Result<ConfigSource, ConfigError> {
    load_from_home(dirs::home_dir().as_deref())
}

/// Load the config file relative to `home`.
///
/// A missing home directory only warns. An unsafe path, a missing file, or
/// a file that cannot be parsed is an error.
pub fn load_from_home(home: Option<&Path>) -> Result<ConfigSource, ConfigError> {
    let Some(home) = home else {
        warn!("Could not determine home directory; skipping config file");
        return Ok(ConfigSource::NoHomeDirectory);
    };

    let path = config_path(home)?;

    if !path.is_file() {
        return Err(ConfigError::NotFound { path });
    }

    debug!("Loading config from {}", path.display());
    dotenv::from_path(&path).map_err(|source| ConfigError::LoadFailed {
        path: path.clone(),
        source,
    })?;

    Ok(ConfigSource::File(path))
}

/// Build the config file path for `home`, rejecting traversal.
pub fn config_path(home: &Path) -> Result<PathBuf, ConfigError> {
    validate_home(home)?;

    let dir = home.join(".config").join(APP_DIR_NAME);
    let path = dir.join(CONFIG_FILE_NAME);

    if !path.starts_with(&dir) || has_parent_segment(&path) {
        return Err(ConfigError::UnsafePath {
            path,
            reason: "resolved outside the configuration directory".to_string(),
        });
    }

    Ok(path)
}

/// Reject home directories that are relative or contain `..` or `~`.
pub fn validate_home(home: &Path) -> Result<(), ConfigError> {
    let unsafe_path = |reason: &str| ConfigError::UnsafePath {
        path: home.to_path_buf(),
        reason: reason.to_string(),
    };

    if !home.is_absolute() {
        return Err(unsafe_path("home directory is not absolute"));
    }
    if has_parent_segment(home) {
        return Err(unsafe_path("contains a '..' segment"));
    }
    if home.to_string_lossy().contains('~') {
        return Err(unsafe_path("contains an unexpanded '~'"));
    }

    Ok(())
}

fn has_parent_segment(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

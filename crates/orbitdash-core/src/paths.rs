//! Path utilities for orbitdash data directories.
//!
//! The data root defaults to the platform data directory
//! (`~/.local/share/orbitdash` on Linux) and can be moved with
//! `ORBITDASH_DATA_DIR`.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "ORBITDASH_DATA_DIR";

/// File name of the page database inside the data root.
pub const DATABASE_FILE: &str = "orbitdash.db";

/// Errors from path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// The platform has no data directory and no override was given.
    #[error("no data directory available; set {DATA_DIR_ENV}")]
    NoDataDir,
}

/// Resolve the data root from an optional override and the platform default.
pub fn resolve_data_root(
    override_dir: Option<&Path>,
    platform_dir: Option<&Path>,
) -> Result<PathBuf, PathError> {
    match (override_dir, platform_dir) {
        (Some(dir), _) => Ok(dir.to_path_buf()),
        (None, Some(base)) => Ok(base.join("orbitdash")),
        (None, None) => Err(PathError::NoDataDir),
    }
}

/// Directory holding orbitdash's persistent files.
pub fn data_root() -> Result<PathBuf, PathError> {
    let override_dir = std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_data_root(override_dir.as_deref(), dirs::data_dir().as_deref())
}

/// Default location of the page database.
pub fn database_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(DATABASE_FILE))
}

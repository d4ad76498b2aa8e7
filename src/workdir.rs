//! Root directory resolution for zenilib-clean
//!
//! Every pattern in a run is interpreted relative to one root directory,
//! resolved up front: the `--root` flag wins, then the configured root,
//! then the current directory. The result is absolute, lexically cleaned
//! and canonicalized when possible.

use crate::config::Config;
use crate::error::CleanError;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Resolve the directory a run cleans.
///
/// # Arguments
/// * `cli_root` - value of the `--root` flag, if given
/// * `config` - loaded user configuration
///
/// # Returns
/// * `Ok(PathBuf)` - existing directory, absolute and normalized
/// * `Err(CleanError::RootNotFound)` - the chosen root does not exist
/// * `Err(CleanError::NotADirectory)` - the chosen root is not a directory
pub fn resolve_root(cli_root: Option<&Path>, config: &Config) -> Result<PathBuf, CleanError> {
    let cwd = std::env::current_dir()?;
    let chosen = cli_root
        .map(Path::to_path_buf)
        .or_else(|| config.root_path())
        .unwrap_or_else(|| cwd.clone());

    let cleaned = to_absolute(&cwd, &chosen).clean();
    let resolved = try_canonicalize(&cleaned);

    match std::fs::metadata(&resolved) {
        Err(_) => Err(CleanError::RootNotFound(cleaned)),
        Ok(metadata) if !metadata.is_dir() => Err(CleanError::NotADirectory(resolved)),
        Ok(_) => Ok(resolved),
    }
}

/// Resolve a relative path against a base
fn to_absolute(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Canonicalize when possible, otherwise keep the cleaned path
fn try_canonicalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

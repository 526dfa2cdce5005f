//! Base-directory resolution for relative paths.

use std::path::{Path, PathBuf};

use rfgate_common::RfgateError;

/// Directory containing the running executable.
pub fn executable_dir() -> Result<PathBuf, RfgateError> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| RfgateError::Other(format!("{} has no parent directory", exe.display())))
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

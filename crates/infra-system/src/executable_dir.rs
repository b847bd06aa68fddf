// Base directory resolver backed by the running executable's location
use std::path::{Path, PathBuf};
use tracing::debug;

use benzene_launcher_core::error::{AppError, Result};
use benzene_launcher_core::port::BaseDirResolver;

/// Resolves the directory containing the launcher executable
///
/// The caller's current directory is never consulted, so a launch started from a
/// desktop shortcut, a file manager or another shell behaves the same.
pub struct ExecutableDirResolver;

impl ExecutableDirResolver {
    pub fn new() -> Self {
        Self
    }

    /// Directory containing `exe`
    ///
    /// `exe` must be absolute; a bare file name would silently resolve against the
    /// caller's directory.
    pub fn base_dir_of(exe: &Path) -> Result<PathBuf> {
        if !exe.is_absolute() {
            return Err(AppError::BaseDir(format!(
                "executable path is not absolute: {}",
                exe.display()
            )));
        }

        exe.parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                AppError::BaseDir(format!(
                    "executable path has no parent directory: {}",
                    exe.display()
                ))
            })
    }
}

impl Default for ExecutableDirResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseDirResolver for ExecutableDirResolver {
    fn resolve(&self) -> Result<PathBuf> {
        let exe = std::env::current_exe()
            .map_err(|e| AppError::BaseDir(format!("cannot locate executable: {}", e)))?;
        debug!(exe = %exe.display(), "Resolved launcher executable");
        Self::base_dir_of(&exe)
    }

    fn enter(&self, dir: &Path) -> Result<()> {
        std::env::set_current_dir(dir)
            .map_err(|e| AppError::BaseDir(format!("cannot enter {}: {}", dir.display(), e)))
    }
}

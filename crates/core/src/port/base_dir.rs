// Base Directory Port
// Resolves the directory containing the launcher and anchors the process there

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Base directory resolver
///
/// Implementations:
/// - ExecutableDirResolver: directory of the running executable
pub trait BaseDirResolver: Send + Sync {
    /// Absolute directory containing the launcher itself
    ///
    /// Never derived from the caller's current directory.
    fn resolve(&self) -> Result<PathBuf>;

    /// Make `dir` the current working directory for the rest of the invocation
    fn enter(&self, dir: &Path) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::sync::{Arc, Mutex};

    /// Mock resolver returning a fixed directory (or failing when None)
    pub struct MockBaseDirResolver {
        dir: Option<PathBuf>,
        entered: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl MockBaseDirResolver {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self {
                dir: Some(dir.into()),
                entered: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn new_failing() -> Self {
            Self {
                dir: None,
                entered: Arc::new(Mutex::new(Vec::new())),
            }
        }
        pub fn entered(&self) -> Vec<PathBuf> {
            self.entered.lock().unwrap().clone()
        }
    }

    impl BaseDirResolver for MockBaseDirResolver {
        fn resolve(&self) -> Result<PathBuf> {
            self.dir
                .clone()
                .ok_or_else(|| AppError::BaseDir("mock resolver has no directory".to_string()))
        }

        fn enter(&self, dir: &Path) -> Result<()> {
            self.entered.lock().unwrap().push(dir.to_path_buf());
            Ok(())
        }
    }
}

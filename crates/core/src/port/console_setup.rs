// Console Setup Port
// Applies the requested console encoding once, before any output

use crate::domain::ConsoleConfig;

/// Console setup
///
/// Returns the config that is actually in effect. A setup that cannot switch the
/// encoding reports `ConsoleEncoding::Native` instead of failing the launch.
pub trait ConsoleSetup: Send + Sync {
    fn apply(&self, requested: ConsoleConfig) -> ConsoleConfig;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock console setup that accepts (or overrides) every request
    pub struct MockConsoleSetup {
        effective: Option<ConsoleConfig>,
        call_count: Arc<Mutex<usize>>,
    }

    impl MockConsoleSetup {
        /// Accept whatever is requested
        pub fn new() -> Self {
            Self {
                effective: None,
                call_count: Arc::new(Mutex::new(0)),
            }
        }
        /// Always report `effective`, regardless of the request
        pub fn with_effective(effective: ConsoleConfig) -> Self {
            Self {
                effective: Some(effective),
                call_count: Arc::new(Mutex::new(0)),
            }
        }
        pub fn call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    impl Default for MockConsoleSetup {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ConsoleSetup for MockConsoleSetup {
        fn apply(&self, requested: ConsoleConfig) -> ConsoleConfig {
            *self.call_count.lock().unwrap() += 1;
            self.effective.unwrap_or(requested)
        }
    }
}

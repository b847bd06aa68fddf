// Operator Prompt Port
// "Await operator acknowledgment" step, decoupled from the exit-status check

use crate::error::Result;
use async_trait::async_trait;

/// Operator acknowledgment
///
/// Implementations:
/// - StdinPrompt: blocks until the operator presses any key
/// - NoPrompt: returns immediately (scripted / CI contexts)
#[async_trait]
pub trait OperatorPrompt: Send + Sync {
    /// Whether an operator is expected to answer; the prompt text is only shown if true
    fn is_interactive(&self) -> bool;

    /// Block until the operator acknowledges
    async fn acknowledge(&self) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock prompt that records acknowledgments instead of blocking
    pub struct MockOperatorPrompt {
        interactive: bool,
        ack_count: Arc<Mutex<usize>>,
        journal: Option<Arc<Mutex<Vec<String>>>>,
    }

    impl MockOperatorPrompt {
        pub fn new_interactive() -> Self {
            Self {
                interactive: true,
                ack_count: Arc::new(Mutex::new(0)),
                journal: None,
            }
        }
        pub fn new_non_interactive() -> Self {
            Self {
                interactive: false,
                ..Self::new_interactive()
            }
        }
        /// Record an "acknowledge" entry in a shared event journal (ordering tests)
        pub fn with_journal(mut self, journal: Arc<Mutex<Vec<String>>>) -> Self {
            self.journal = Some(journal);
            self
        }
        pub fn ack_count(&self) -> usize {
            *self.ack_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl OperatorPrompt for MockOperatorPrompt {
        fn is_interactive(&self) -> bool {
            self.interactive
        }

        async fn acknowledge(&self) -> Result<()> {
            *self.ack_count.lock().unwrap() += 1;
            if let Some(journal) = &self.journal {
                journal.lock().unwrap().push("acknowledge".to_string());
            }
            Ok(())
        }
    }
}

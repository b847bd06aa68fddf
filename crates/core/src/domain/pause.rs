// Pause-on-failure policy

use crate::domain::error::DomainError;
use std::str::FromStr;

/// When the failure branch waits for operator acknowledgment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PausePolicy {
    /// Pause only if stdin is attached to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl PausePolicy {
    pub fn should_pause(&self, stdin_is_terminal: bool) -> bool {
        match self {
            PausePolicy::Auto => stdin_is_terminal,
            PausePolicy::Always => true,
            PausePolicy::Never => false,
        }
    }
}

impl FromStr for PausePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(PausePolicy::Auto),
            "always" => Ok(PausePolicy::Always),
            "never" => Ok(PausePolicy::Never),
            other => Err(DomainError::UnknownPausePolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follows_terminal() {
        assert!(PausePolicy::Auto.should_pause(true));
        assert!(!PausePolicy::Auto.should_pause(false));
    }

    #[test]
    fn test_fixed_policies_ignore_terminal() {
        assert!(PausePolicy::Always.should_pause(false));
        assert!(!PausePolicy::Never.should_pause(true));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Always".parse::<PausePolicy>().unwrap(), PausePolicy::Always);
        assert!("sometimes".parse::<PausePolicy>().is_err());
    }
}

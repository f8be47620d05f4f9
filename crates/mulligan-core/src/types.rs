//! Runtime configuration types

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Retry configuration for a wrapped task
///
/// The attempt budget bounds the total number of task invocations, not the
/// number of retries after the first call: `max_attempts = 5` means at most
/// five calls to the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RetryConfig {
    /// Maximum number of task invocations before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_max_attempts() -> u32 {
    5
}

impl RetryConfig {
    /// Create a configuration with the given attempt budget
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Validate the configuration
    ///
    /// The attempt budget must be at least 1. A zero budget would mean the
    /// task is never invoked and the executor could only fail.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::invalid_config("max-attempts must be at least 1"));
        }
        Ok(())
    }

    /// Parse a configuration from a JSON document and validate it
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_is_five() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 5);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: RetryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_attempts, 5);
    }

    #[test]
    fn test_kebab_case_field_name() {
        let config: RetryConfig = serde_json::from_str(r#"{"max-attempts": 3}"#).unwrap();
        assert_eq!(config.max_attempts, 3);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("max-attempts"));
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        let config = RetryConfig::new(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_validate_accepts_positive_budget() {
        assert!(RetryConfig::new(1).validate().is_ok());
        assert!(RetryConfig::new(100).validate().is_ok());
    }

    #[test]
    fn test_from_json_str_validates() {
        let config = RetryConfig::from_json_str(r#"{"max-attempts": 2}"#).unwrap();
        assert_eq!(config.max_attempts, 2);

        let err = RetryConfig::from_json_str(r#"{"max-attempts": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));

        let err = RetryConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)));
    }
}

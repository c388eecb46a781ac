use std::time::Duration;

use anyhow::{Context, Result};

/// Configuration for the classification oracle, passed into the adapter at
/// construction time. Nothing in the engine reads environment variables at
/// call time, so the misconfigured-oracle path is testable by constructing
/// a config with `api_key: None`.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Absent key ≠ error: the oracle reports `MissingCredentials` when
    /// consulted and the orchestrator falls back to keyword scoring.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub max_tokens: u32,
    /// Bound on the whole oracle round-trip. On expiry the adapter resolves
    /// to unavailable instead of stalling the classification step.
    pub timeout: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "claude-sonnet-4-5".to_string(),
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            max_tokens: 1024,
            timeout: Duration::from_secs(20),
        }
    }
}

impl OracleConfig {
    /// Loads configuration from the environment (and `.env` if present).
    /// Absent variables fall back to defaults; an absent
    /// `ANTHROPIC_API_KEY` leaves the oracle unconfigured rather than
    /// failing. Only a malformed value errors, at startup.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let timeout = match std::env::var("ORACLE_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .context("ORACLE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            Err(_) => defaults.timeout,
        };

        Ok(Self {
            api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            model: std::env::var("ORACLE_MODEL").unwrap_or(defaults.model),
            endpoint: std::env::var("ORACLE_ENDPOINT").unwrap_or(defaults.endpoint),
            max_tokens: defaults.max_tokens,
            timeout,
        })
    }

    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_credentials() {
        let config = OracleConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "claude-sonnet-4-5");
        assert_eq!(config.timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_with_api_key_sets_only_the_key() {
        let config = OracleConfig::with_api_key("sk-test");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.endpoint, OracleConfig::default().endpoint);
    }
}

//! Process configuration for the MailScout server.
//!
//! The only configuration value is the Tavily API credential, read once at
//! startup from the process environment and injected into the components that
//! need it. It is never read again after startup and never stored in any
//! global mutable state.

use std::env;
use std::fmt;

/// Environment variable holding the Tavily API credential.
pub const TAVILY_API_KEY_VAR: &str = "TAVILY_API_KEY";

/// Immutable process configuration, constructed once at startup.
#[derive(Clone)]
pub struct Config {
    tavily_api_key: String,
}

impl Config {
    /// Build a configuration from an explicit credential value.
    pub fn new(tavily_api_key: impl Into<String>) -> Self {
        Self {
            tavily_api_key: tavily_api_key.into(),
        }
    }

    /// Load the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when `TAVILY_API_KEY` is
    /// unset or blank. Callers must treat this as fatal and refuse to serve.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(TAVILY_API_KEY_VAR) {
            Ok(value) if !value.trim().is_empty() => Ok(Self::new(value)),
            _ => Err(ConfigError::MissingCredential),
        }
    }

    /// The Tavily API credential.
    pub fn tavily_api_key(&self) -> &str {
        &self.tavily_api_key
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The credential must never end up in logs.
        f.debug_struct("Config")
            .field("tavily_api_key", &"<redacted>")
            .finish()
    }
}

/// Errors raised while loading process configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The provider credential is absent; the server must not start.
    #[error("TAVILY_API_KEY is not set; the server cannot reach the search provider")]
    MissingCredential,
}

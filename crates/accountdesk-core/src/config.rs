//! Account service location.

use url::Url;

use crate::{Error, Result};

/// Environment variable overriding the account service base URL.
pub const API_URL_ENV: &str = "ACCOUNTDESK_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: Url,
}

impl Config {
    /// Resolve the base URL from the environment, then the settings file
    /// value, then the built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen URL is invalid.
    pub fn from_env(settings_url: Option<&str>) -> Result<Self> {
        Self::resolve(std::env::var(API_URL_ENV).ok(), settings_url)
    }

    /// Resolve the base URL from explicit sources, highest priority first.
    ///
    /// Blank values are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen URL does not parse or cannot carry a
    /// path (e.g. `mailto:`).
    pub fn resolve(env_url: Option<String>, settings_url: Option<&str>) -> Result<Self> {
        let raw = env_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| settings_url.map(str::trim).filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_API_URL);

        let base_url = Url::parse(raw)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "API URL {raw} cannot be used as a base URL"
            )));
        }
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "API URL {raw} must use http or https"
            )));
        }

        Ok(Self { base_url })
    }

    /// Base URL of the account service.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

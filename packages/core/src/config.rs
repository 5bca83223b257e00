//! Environment-backed configuration.
//!
//! All credentials and identifiers arrive through environment variables and
//! are read exactly once at startup into a [`Config`] value. Missing
//! variables are aggregated into a single error so the operator sees every
//! absent name at once instead of fixing them one run at a time.

use thiserror::Error;

/// Production base URL for the tunnel provider API
pub const DEFAULT_TUNNEL_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Production base URL for the status page API
pub const DEFAULT_STATUSPAGE_API_BASE: &str = "https://api.statuspage.io/v1";

/// Environment variables that must be present at startup
pub const REQUIRED_VARS: [&str; 6] = [
    "CF_ACCOUNT_ID",
    "CF_API_TOKEN",
    "CF_TUNNEL_ID",
    "SP_PAGE_ID",
    "SP_API_TOKEN",
    "SP_COMPONENT_ID",
];

/// Configuration errors, fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),
}

/// Resolved runtime configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Tunnel provider account identifier (`CF_ACCOUNT_ID`)
    pub account_id: String,
    /// Tunnel provider API token, sent as a bearer token (`CF_API_TOKEN`)
    pub tunnel_api_token: String,
    /// Tunnel identifier (`CF_TUNNEL_ID`)
    pub tunnel_id: String,
    /// Status page identifier (`SP_PAGE_ID`)
    pub page_id: String,
    /// Status page API token, sent as an OAuth token (`SP_API_TOKEN`)
    pub statuspage_api_token: String,
    /// Status page component identifier (`SP_COMPONENT_ID`)
    pub component_id: String,
    /// Tunnel provider API base URL (`CF_API_BASE_URL`, optional override)
    pub tunnel_api_base: String,
    /// Status page API base URL (`SP_API_BASE_URL`, optional override)
    pub statuspage_api_base: String,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    ///
    /// The lookup indirection keeps tests from mutating process-wide
    /// environment state. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|key| lookup(key).is_none_or(|value| value.trim().is_empty()))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let require = |key: &str| lookup(key).unwrap_or_default();
        let base_or = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            account_id: require("CF_ACCOUNT_ID"),
            tunnel_api_token: require("CF_API_TOKEN"),
            tunnel_id: require("CF_TUNNEL_ID"),
            page_id: require("SP_PAGE_ID"),
            statuspage_api_token: require("SP_API_TOKEN"),
            component_id: require("SP_COMPONENT_ID"),
            tunnel_api_base: base_or("CF_API_BASE_URL", DEFAULT_TUNNEL_API_BASE),
            statuspage_api_base: base_or("SP_API_BASE_URL", DEFAULT_STATUSPAGE_API_BASE),
        })
    }
}

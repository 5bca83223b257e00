//! Tunnel provider API client.
//!
//! Reads the provider-reported health of a single tunnel from the
//! account-scoped tunnel endpoint. Read-only; this system never writes to
//! the provider.

use serde::Deserialize;
use tracing::{debug, error};

use super::build_http_client;
use crate::config::Config;
use crate::error::SyncError;
use crate::status::TunnelStatus;

#[derive(Deserialize)]
struct TunnelResponse {
    result: Option<TunnelResult>,
}

#[derive(Deserialize)]
struct TunnelResult {
    status: Option<String>,
}

/// Client for the tunnel provider API
pub struct TunnelClient {
    http: reqwest::Client,
    base_url: String,
    account_id: String,
    tunnel_id: String,
    api_token: String,
}

impl TunnelClient {
    pub fn new(config: &Config) -> Result<Self, SyncError> {
        Ok(Self {
            http: build_http_client()?,
            base_url: config.tunnel_api_base.clone(),
            account_id: config.account_id.clone(),
            tunnel_id: config.tunnel_id.clone(),
            api_token: config.tunnel_api_token.clone(),
        })
    }

    fn tunnel_url(&self) -> String {
        format!(
            "{}/accounts/{}/tunnel/{}",
            self.base_url, self.account_id, self.tunnel_id
        )
    }

    /// Fetch the current tunnel health
    ///
    /// Returns [`SyncError::Api`] on a non-success HTTP status,
    /// [`SyncError::Format`] when the body lacks `result.status`, and
    /// [`SyncError::UnknownStatus`] for values outside the closed set.
    pub async fn fetch_status(&self) -> Result<TunnelStatus, SyncError> {
        let url = self.tunnel_url();
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let http_status = response.status();
        let body = response.text().await?;
        if !http_status.is_success() {
            error!("tunnel provider returned HTTP {http_status}: {body}");
            return Err(SyncError::Api {
                service: "tunnel provider",
                status: http_status.as_u16(),
                body,
            });
        }

        let parsed: TunnelResponse = serde_json::from_str(&body)
            .map_err(|e| SyncError::Format(format!("tunnel response is not valid JSON: {e}")))?;
        let value = parsed
            .result
            .and_then(|result| result.status)
            .ok_or_else(|| {
                SyncError::Format("tunnel response missing result.status".to_string())
            })?;

        TunnelStatus::parse(&value)
    }
}

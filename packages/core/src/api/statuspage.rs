//! Status page API client.
//!
//! Reads and conditionally updates a single component. At most one update is
//! ever issued per invocation, and `under_maintenance` is never written.

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use super::build_http_client;
use crate::config::Config;
use crate::error::SyncError;
use crate::status::ComponentStatus;

#[derive(Deserialize)]
struct ComponentResponse {
    status: Option<String>,
}

/// Client for the status page component endpoint
pub struct StatusPageClient {
    http: reqwest::Client,
    base_url: String,
    page_id: String,
    component_id: String,
    api_token: String,
}

impl StatusPageClient {
    pub fn new(config: &Config) -> Result<Self, SyncError> {
        Ok(Self {
            http: build_http_client()?,
            base_url: config.statuspage_api_base.clone(),
            page_id: config.page_id.clone(),
            component_id: config.component_id.clone(),
            api_token: config.statuspage_api_token.clone(),
        })
    }

    fn component_url(&self) -> String {
        format!(
            "{}/pages/{}/components/{}",
            self.base_url, self.page_id, self.component_id
        )
    }

    fn auth_header(&self) -> String {
        format!("OAuth {}", self.api_token)
    }

    /// Fetch the component's current status
    pub async fn fetch_component_status(&self) -> Result<ComponentStatus, SyncError> {
        let url = self.component_url();
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        let http_status = response.status();
        let body = response.text().await?;
        if !http_status.is_success() {
            error!("status page returned HTTP {http_status}: {body}");
            return Err(SyncError::Api {
                service: "status page",
                status: http_status.as_u16(),
                body,
            });
        }

        let parsed: ComponentResponse = serde_json::from_str(&body).map_err(|e| {
            SyncError::Format(format!("component response is not valid JSON: {e}"))
        })?;
        let value = parsed
            .status
            .ok_or_else(|| SyncError::Format("component response missing status".to_string()))?;

        ComponentStatus::parse(&value)
    }

    /// Set the component's status; the single write of a sync run
    pub async fn update_component_status(&self, status: ComponentStatus) -> Result<(), SyncError> {
        let url = self.component_url();
        debug!("PATCH {url} -> {status}");

        let payload = json!({ "component": { "status": status } });
        let response = self
            .http
            .patch(&url)
            .header(AUTHORIZATION, self.auth_header())
            .json(&payload)
            .send()
            .await?;

        let http_status = response.status();
        if !http_status.is_success() {
            let body = response.text().await?;
            error!("status page returned HTTP {http_status}: {body}");
            return Err(SyncError::Api {
                service: "status page",
                status: http_status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

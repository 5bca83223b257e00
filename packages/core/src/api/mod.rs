//! HTTP clients for the two external services.
//!
//! Both clients share the same transport policy: a fixed per-request
//! timeout and no redirect following.

mod statuspage;
mod tunnel;

pub use statuspage::StatusPageClient;
pub use tunnel::TunnelClient;

use std::time::Duration;

use crate::error::SyncError;

/// Fixed per-request timeout for both services
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn build_http_client() -> Result<reqwest::Client, SyncError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

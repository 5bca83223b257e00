//! statusbridge-core - Core library for statusbridge
//!
//! Provides the environment-backed configuration layer, the status domain
//! model with the fixed tunnel-to-component mapping, the HTTP clients for
//! the tunnel provider and the status page, and the `sync` operation that
//! ties them together.

pub mod api;
pub mod config;
pub mod error;
pub mod status;
pub mod sync;

pub use api::{REQUEST_TIMEOUT, StatusPageClient, TunnelClient};
pub use config::{Config, ConfigError};
pub use error::SyncError;
pub use status::{ComponentStatus, TunnelStatus, map_tunnel_status};
pub use sync::{StatusReport, SyncOutcome, check, sync};

/// Get the current crate version
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! The synchronization operation.
//!
//! One stateless pass: read the component status, honor the maintenance
//! override, read the tunnel health, translate it, and issue at most one
//! corrective update when the two diverge. Repeated runs with unchanged
//! upstream state never write.

use tracing::info;

use crate::api::{StatusPageClient, TunnelClient};
use crate::error::SyncError;
use crate::status::{ComponentStatus, TunnelStatus, map_tunnel_status};

/// What a sync run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Component is under maintenance; nothing was fetched or written beyond
    /// the initial component read
    MaintenanceSkip,
    /// Component already matches the mapped tunnel status
    NoChange { current: ComponentStatus },
    /// Component was updated from one status to another
    Updated {
        from: ComponentStatus,
        to: ComponentStatus,
    },
}

/// Synchronize the status page component with the tunnel's reported health
///
/// Issues at most one write. Any failure aborts the run with no partial
/// update; retrying is the caller's concern.
pub async fn sync(
    statuspage: &StatusPageClient,
    tunnel: &TunnelClient,
) -> Result<SyncOutcome, SyncError> {
    let current = statuspage.fetch_component_status().await?;
    info!("current component status: {current}");

    // Maintenance set on the status page wins over any tunnel state.
    if current == ComponentStatus::UnderMaintenance {
        info!("component is under maintenance, no changes will be made");
        return Ok(SyncOutcome::MaintenanceSkip);
    }

    let tunnel_status = tunnel.fetch_status().await?;
    info!("current tunnel status: {tunnel_status}");

    let target = map_tunnel_status(tunnel_status);
    if target == current {
        info!("no status change detected, no update necessary");
        return Ok(SyncOutcome::NoChange { current });
    }

    info!("status change detected, updating component status to: {target}");
    statuspage.update_component_status(target).await?;

    Ok(SyncOutcome::Updated {
        from: current,
        to: target,
    })
}

/// Read-only snapshot of both statuses and the mapped target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub component: ComponentStatus,
    pub tunnel: TunnelStatus,
    pub target: ComponentStatus,
}

impl StatusReport {
    /// True when the component is flagged under maintenance
    pub fn is_maintenance(&self) -> bool {
        self.component == ComponentStatus::UnderMaintenance
    }

    /// True when a sync run would issue a write
    pub fn would_update(&self) -> bool {
        !self.is_maintenance() && self.target != self.component
    }
}

/// Fetch both statuses without writing anything
pub async fn check(
    statuspage: &StatusPageClient,
    tunnel: &TunnelClient,
) -> Result<StatusReport, SyncError> {
    let component = statuspage.fetch_component_status().await?;
    let tunnel_status = tunnel.fetch_status().await?;

    Ok(StatusReport {
        component,
        tunnel: tunnel_status,
        target: map_tunnel_status(tunnel_status),
    })
}

//! Sync command implementation
//!
//! Runs one synchronization pass: read both statuses and issue at most one
//! component update when they diverge.

use anyhow::Result;
use clap::Args;
use console::style;
use statusbridge_core::{Config, StatusPageClient, SyncOutcome, TunnelClient};

use crate::output::component_status_style;

/// Arguments for the sync command
#[derive(Args, Default)]
pub struct SyncArgs {}

/// Run one synchronization pass
///
/// In quiet mode nothing is printed; the exit code alone reports the result.
pub async fn cmd_sync(_args: &SyncArgs, config: &Config, quiet: bool) -> Result<()> {
    let statuspage = StatusPageClient::new(config)?;
    let tunnel = TunnelClient::new(config)?;

    let outcome = statusbridge_core::sync(&statuspage, &tunnel).await?;

    if quiet {
        return Ok(());
    }

    match outcome {
        SyncOutcome::MaintenanceSkip => {
            println!(
                "{} Component is under maintenance; no changes made.",
                style("Note:").cyan()
            );
        }
        SyncOutcome::NoChange { current } => {
            println!(
                "{} Component already {}; no update necessary.",
                style("OK:").green(),
                component_status_style(current)
            );
        }
        SyncOutcome::Updated { from, to } => {
            println!(
                "{} Component status {} {} {}",
                style("Updated:").green().bold(),
                component_status_style(from),
                style("->").dim(),
                component_status_style(to)
            );
        }
    }

    Ok(())
}

//! Check command implementation
//!
//! Read-only report of the component status, the tunnel status, the mapped
//! target, and what a sync run would do. Never issues a write.

use anyhow::Result;
use clap::Args;
use console::style;
use statusbridge_core::{Config, StatusPageClient, StatusReport, TunnelClient, check};

use crate::output::{component_status_style, tunnel_status_style};

/// Arguments for the check command
#[derive(Args, Default)]
pub struct CheckArgs {}

const CHECK_LABEL_WIDTH: usize = 11;

/// Show both statuses and the pending action
///
/// In quiet mode:
/// - Exits 0 when the component is in sync (or under maintenance)
/// - Exits 1 when a sync run would issue an update
/// - No output
pub async fn cmd_check(_args: &CheckArgs, config: &Config, quiet: bool) -> Result<()> {
    let statuspage = StatusPageClient::new(config)?;
    let tunnel = TunnelClient::new(config)?;

    let report = check(&statuspage, &tunnel).await?;

    if quiet {
        if report.would_update() {
            std::process::exit(1);
        }
        return Ok(());
    }

    print_row("Component", &component_status_style(report.component).to_string());
    print_row("Tunnel", &tunnel_status_style(report.tunnel).to_string());
    print_row("Target", &component_status_style(report.target).to_string());
    print_row("Action", &action_label(&report));

    Ok(())
}

fn action_label(report: &StatusReport) -> String {
    if report.is_maintenance() {
        style("none (maintenance override)").cyan().to_string()
    } else if report.would_update() {
        style("update pending").yellow().to_string()
    } else {
        style("none (in sync)").green().to_string()
    }
}

fn print_row(label: &str, value: &str) {
    let padded = format!("{:<CHECK_LABEL_WIDTH$}", format!("{label}:"));
    println!("{} {}", style(padded).bold(), value);
}

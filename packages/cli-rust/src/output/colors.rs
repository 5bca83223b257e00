//! Color utilities for CLI output
//!
//! Provides consistent color styling for component and tunnel statuses.

use console::{Style, StyledObject};
use statusbridge_core::{ComponentStatus, TunnelStatus};

/// Style a component status with colors matching its severity
///
/// - operational -> green bold
/// - degraded_performance -> yellow
/// - partial_outage, major_outage -> red
/// - under_maintenance -> cyan
/// - empty -> dim, rendered as "(empty)"
pub fn component_status_style(status: ComponentStatus) -> StyledObject<String> {
    let style = match status {
        ComponentStatus::Operational => Style::new().green().bold(),
        ComponentStatus::DegradedPerformance => Style::new().yellow(),
        ComponentStatus::PartialOutage | ComponentStatus::MajorOutage => Style::new().red(),
        ComponentStatus::UnderMaintenance => Style::new().cyan(),
        ComponentStatus::Empty => Style::new().dim(),
    };
    let label = if status == ComponentStatus::Empty {
        "(empty)".to_string()
    } else {
        status.to_string()
    };
    style.apply_to(label)
}

/// Style a tunnel status with colors matching its severity
///
/// - healthy -> green bold
/// - degraded -> yellow
/// - down -> red
/// - inactive -> dim
pub fn tunnel_status_style(status: TunnelStatus) -> StyledObject<String> {
    let style = match status {
        TunnelStatus::Healthy => Style::new().green().bold(),
        TunnelStatus::Degraded => Style::new().yellow(),
        TunnelStatus::Down => Style::new().red(),
        TunnelStatus::Inactive => Style::new().dim(),
    };
    style.apply_to(status.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_operational_renders_wire_string() {
        let styled = component_status_style(ComponentStatus::Operational);
        assert_eq!(styled.to_string(), "operational");
    }

    #[test]
    fn component_empty_renders_placeholder() {
        let styled = component_status_style(ComponentStatus::Empty);
        assert_eq!(styled.to_string(), "(empty)");
    }

    #[test]
    fn component_major_outage_renders_wire_string() {
        let styled = component_status_style(ComponentStatus::MajorOutage);
        assert_eq!(styled.to_string(), "major_outage");
    }

    #[test]
    fn tunnel_statuses_render_wire_strings() {
        for tunnel in TunnelStatus::ALL {
            assert_eq!(tunnel_status_style(tunnel).to_string(), tunnel.as_str());
        }
    }
}

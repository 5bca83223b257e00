//! Status domain model and the fixed tunnel-to-component mapping.
//!
//! Both enumerations are closed. External data is untrusted, so wire strings
//! are validated against the explicit allow-set on ingest and anything else
//! is rejected as [`SyncError::UnknownStatus`] instead of passed through.

use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// Health of the tunnel as reported by the infrastructure provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TunnelStatus {
    Inactive,
    Degraded,
    Healthy,
    Down,
}

impl TunnelStatus {
    /// All recognized tunnel health values
    pub const ALL: [TunnelStatus; 4] = [
        TunnelStatus::Inactive,
        TunnelStatus::Degraded,
        TunnelStatus::Healthy,
        TunnelStatus::Down,
    ];

    /// Parse a wire value, rejecting anything outside the closed set
    pub fn parse(value: &str) -> Result<Self, SyncError> {
        match value {
            "inactive" => Ok(TunnelStatus::Inactive),
            "degraded" => Ok(TunnelStatus::Degraded),
            "healthy" => Ok(TunnelStatus::Healthy),
            "down" => Ok(TunnelStatus::Down),
            _ => Err(SyncError::UnknownStatus {
                kind: "tunnel",
                value: value.to_string(),
            }),
        }
    }

    /// Wire representation of this value
    pub fn as_str(self) -> &'static str {
        match self {
            TunnelStatus::Inactive => "inactive",
            TunnelStatus::Degraded => "degraded",
            TunnelStatus::Healthy => "healthy",
            TunnelStatus::Down => "down",
        }
    }
}

impl std::fmt::Display for TunnelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of the component on the public status page
///
/// The synchronizer reads every value but never writes `UnderMaintenance`;
/// that value only enters the system from the status page itself and acts
/// as an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStatus {
    #[serde(rename = "")]
    Empty,
    Operational,
    UnderMaintenance,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
}

impl ComponentStatus {
    /// Parse a wire value, rejecting anything outside the closed set
    pub fn parse(value: &str) -> Result<Self, SyncError> {
        match value {
            "" => Ok(ComponentStatus::Empty),
            "operational" => Ok(ComponentStatus::Operational),
            "under_maintenance" => Ok(ComponentStatus::UnderMaintenance),
            "degraded_performance" => Ok(ComponentStatus::DegradedPerformance),
            "partial_outage" => Ok(ComponentStatus::PartialOutage),
            "major_outage" => Ok(ComponentStatus::MajorOutage),
            _ => Err(SyncError::UnknownStatus {
                kind: "component",
                value: value.to_string(),
            }),
        }
    }

    /// Wire representation of this value
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentStatus::Empty => "",
            ComponentStatus::Operational => "operational",
            ComponentStatus::UnderMaintenance => "under_maintenance",
            ComponentStatus::DegradedPerformance => "degraded_performance",
            ComponentStatus::PartialOutage => "partial_outage",
            ComponentStatus::MajorOutage => "major_outage",
        }
    }
}

impl std::fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed translation table from tunnel health to component status
///
/// Pure and total over the tunnel domain, stable across invocations.
/// Never produces `UnderMaintenance`.
pub fn map_tunnel_status(status: TunnelStatus) -> ComponentStatus {
    match status {
        TunnelStatus::Inactive => ComponentStatus::Empty,
        TunnelStatus::Degraded => ComponentStatus::DegradedPerformance,
        TunnelStatus::Healthy => ComponentStatus::Operational,
        TunnelStatus::Down => ComponentStatus::MajorOutage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_table_covers_every_tunnel_value() {
        let expected = [
            (TunnelStatus::Inactive, ComponentStatus::Empty),
            (TunnelStatus::Degraded, ComponentStatus::DegradedPerformance),
            (TunnelStatus::Healthy, ComponentStatus::Operational),
            (TunnelStatus::Down, ComponentStatus::MajorOutage),
        ];
        for (tunnel, component) in expected {
            assert_eq!(map_tunnel_status(tunnel), component);
        }
    }

    #[test]
    fn mapping_never_produces_maintenance() {
        for tunnel in TunnelStatus::ALL {
            assert_ne!(
                map_tunnel_status(tunnel),
                ComponentStatus::UnderMaintenance
            );
        }
    }

    #[test]
    fn tunnel_parse_round_trips_all_values() {
        for tunnel in TunnelStatus::ALL {
            assert_eq!(TunnelStatus::parse(tunnel.as_str()).unwrap(), tunnel);
        }
    }

    #[test]
    fn tunnel_parse_rejects_unknown_value() {
        let err = TunnelStatus::parse("flapping").unwrap_err();
        match err {
            SyncError::UnknownStatus { kind, value } => {
                assert_eq!(kind, "tunnel");
                assert_eq!(value, "flapping");
            }
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn component_parse_accepts_empty_string() {
        assert_eq!(
            ComponentStatus::parse("").unwrap(),
            ComponentStatus::Empty
        );
    }

    #[test]
    fn component_parse_rejects_unknown_value() {
        let err = ComponentStatus::parse("on_fire").unwrap_err();
        match err {
            SyncError::UnknownStatus { kind, value } => {
                assert_eq!(kind, "component");
                assert_eq!(value, "on_fire");
            }
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn component_status_serializes_to_wire_string() {
        let json = serde_json::to_string(&ComponentStatus::MajorOutage).unwrap();
        assert_eq!(json, "\"major_outage\"");
        let json = serde_json::to_string(&ComponentStatus::Empty).unwrap();
        assert_eq!(json, "\"\"");
    }
}

//! Mock operations telemetry: incidents, health metrics, and drift.
//!
//! Canned data backing the operations console. A real deployment would feed
//! these from monitoring integrations; the shapes are what matters here.

use serde::{Deserialize, Serialize};

/// Incident severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

/// Incident lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    Investigating,
    Resolved,
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentStatus::Investigating => write!(f, "Investigating"),
            IncidentStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

/// One operational incident against a landscape component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: u32,
    pub severity: Severity,
    /// Affected component, by display name.
    pub component: String,
    pub status: IncidentStatus,
    pub summary: String,
}

/// Aggregate architecture health scores, each in [0, 100] except uptime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Overall architecture maturity score.
    pub maturity: u32,
    /// Availability over the trailing window, percent.
    pub uptime: f64,
    /// Policy compliance score.
    pub compliance: u32,
}

/// Configuration drift across the tracked landscape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftSummary {
    pub total_components: u32,
    pub drifting_components: u32,
    /// Drifting share, percent.
    pub drift_pct: u32,
}

/// The canned incident feed.
pub fn mock_incidents() -> Vec<Incident> {
    vec![
        Incident {
            id: 1,
            severity: Severity::Critical,
            component: "SAP S/4HANA".into(),
            status: IncidentStatus::Investigating,
            summary: "Order processing API returning 503 errors".into(),
        },
        Incident {
            id: 2,
            severity: Severity::High,
            component: "AWS EC2 (eu-central-1)".into(),
            status: IncidentStatus::Investigating,
            summary: "High CPU utilization on app-server-1".into(),
        },
        Incident {
            id: 3,
            severity: Severity::Medium,
            component: "Salesforce Connector".into(),
            status: IncidentStatus::Resolved,
            summary: "Increased API call latency".into(),
        },
        Incident {
            id: 4,
            severity: Severity::Medium,
            component: "S3 Bucket (public-assets)".into(),
            status: IncidentStatus::Resolved,
            summary: "Drift detected: Public access enabled".into(),
        },
    ]
}

/// The canned health scores.
pub fn health_metrics() -> HealthMetrics {
    HealthMetrics {
        maturity: 78,
        uptime: 99.95,
        compliance: 95,
    }
}

/// The canned drift summary.
pub fn drift_summary() -> DriftSummary {
    DriftSummary {
        total_components: 50,
        drifting_components: 2,
        drift_pct: 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_feed_shape() {
        let incidents = mock_incidents();
        assert_eq!(incidents.len(), 4);
        assert_eq!(incidents[0].severity, Severity::Critical);
        assert!(
            incidents
                .iter()
                .any(|i| i.status == IncidentStatus::Resolved)
        );
    }

    #[test]
    fn drift_percentage_is_consistent() {
        let drift = drift_summary();
        assert_eq!(
            drift.drift_pct,
            drift.drifting_components * 100 / drift.total_components
        );
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Critical.to_string(), "Critical");
        assert_eq!(IncidentStatus::Investigating.to_string(), "Investigating");
    }
}

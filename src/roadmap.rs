//! Roadmap planner: migration initiatives, wave policy, and the mock optimizer.
//!
//! Initiatives are grouped into delivery waves with a cost and risk tier.
//! The optimizer re-orders them for quick wins and risk mitigation; the wave
//! policy flags high-risk work scheduled too early. Like the graph store,
//! the [`RoadmapStore`] is an explicitly owned, versioned state container.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Delivery risk classification for an initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Medium => write!(f, "Medium"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

/// One migration initiative on the roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    /// Stable identifier, referenced by other initiatives' dependencies.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Delivery wave label (e.g. "Wave 1").
    pub wave: String,
    /// Estimated cost in thousands.
    pub cost_k: u32,
    /// Delivery risk tier.
    pub risk: RiskTier,
    /// Ids of initiatives that must land first.
    pub dependencies: Vec<String>,
    /// Whether the initiative currently passes policy.
    pub compliant: bool,
}

impl Initiative {
    /// Create a compliant initiative with no dependencies.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        wave: impl Into<String>,
        cost_k: u32,
        risk: RiskTier,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            wave: wave.into(),
            cost_k,
            risk,
            dependencies: Vec::new(),
            compliant: true,
        }
    }

    /// Add a dependency on another initiative.
    pub fn with_dependency(mut self, id: impl Into<String>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    /// Set the compliance flag.
    pub fn with_compliance(mut self, compliant: bool) -> Self {
        self.compliant = compliant;
        self
    }
}

/// Outcome of a policy scan over one initiative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyVerdict {
    /// The scanned initiative.
    pub initiative_id: String,
    /// Whether the initiative passes.
    pub compliant: bool,
    /// Failure reason, when non-compliant.
    pub reason: Option<String>,
}

/// Wave policy: high-risk initiatives may not sit in the first wave.
pub fn scan_wave_policy(initiative: &Initiative) -> PolicyVerdict {
    if initiative.risk == RiskTier::High && initiative.wave == "Wave 1" {
        PolicyVerdict {
            initiative_id: initiative.id.clone(),
            compliant: false,
            reason: Some("High-risk items not allowed in first wave.".into()),
        }
    } else {
        PolicyVerdict {
            initiative_id: initiative.id.clone(),
            compliant: true,
            reason: None,
        }
    }
}

/// The demo migration portfolio the planner starts from.
pub fn seed_initiatives() -> Vec<Initiative> {
    vec![
        Initiative::new("1", "Deploy Core Infra (Wave 1)", "Wave 1", 150, RiskTier::Low),
        Initiative::new("2", "Migrate Non-Critical Apps", "Wave 1", 200, RiskTier::Low)
            .with_dependency("1"),
        Initiative::new("3", "SAP S/4HANA Lift & Shift", "Wave 2", 500, RiskTier::High)
            .with_dependency("1")
            .with_compliance(false),
        Initiative::new("4", "Integrate Salesforce", "Wave 2", 250, RiskTier::Medium)
            .with_dependency("3"),
        Initiative::new("5", "Decommission Legacy Systems", "Wave 3", 100, RiskTier::Medium)
            .with_dependency("2")
            .with_dependency("4"),
    ]
}

#[derive(Debug)]
struct RoadmapState {
    initiatives: Vec<Initiative>,
    version: u64,
}

/// Versioned roadmap store.
///
/// Unlike the graph store, `replace` here advances the version rather than
/// resetting it: the roadmap evolves in place, it is not rebuilt from
/// scratch per ingestion.
#[derive(Debug)]
pub struct RoadmapStore {
    state: RwLock<RoadmapState>,
}

impl RoadmapStore {
    /// Create an empty roadmap at version 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RoadmapState {
                initiatives: Vec::new(),
                version: 1,
            }),
        }
    }

    /// Create a roadmap pre-loaded with the demo portfolio.
    pub fn seeded() -> Self {
        Self {
            state: RwLock::new(RoadmapState {
                initiatives: seed_initiatives(),
                version: 1,
            }),
        }
    }

    /// Replace the initiative list. Advances the version.
    pub fn replace(&self, initiatives: Vec<Initiative>) {
        let mut state = self.state.write().expect("roadmap lock poisoned");
        tracing::debug!(initiatives = initiatives.len(), "replacing roadmap");
        state.initiatives = initiatives;
        state.version += 1;
    }

    /// Re-order the roadmap for quick wins and risk mitigation: cheapest
    /// first, high-risk pushed to the back. Both sorts are stable, so cost
    /// order is preserved within each risk class. Advances the version.
    pub fn optimize(&self) {
        let mut state = self.state.write().expect("roadmap lock poisoned");
        state.initiatives.sort_by(|a, b| a.cost_k.cmp(&b.cost_k));
        state.initiatives.sort_by_key(|i| i.risk == RiskTier::High);
        state.version += 1;
        tracing::info!(version = state.version, "roadmap optimized");
    }

    /// Run the wave policy over every initiative.
    pub fn audit(&self) -> Vec<PolicyVerdict> {
        let state = self.state.read().expect("roadmap lock poisoned");
        state.initiatives.iter().map(scan_wave_policy).collect()
    }

    /// Snapshot of the current initiatives.
    pub fn initiatives(&self) -> Vec<Initiative> {
        self.state
            .read()
            .expect("roadmap lock poisoned")
            .initiatives
            .clone()
    }

    /// The current version counter.
    pub fn version(&self) -> u64 {
        self.state.read().expect("roadmap lock poisoned").version
    }

    /// Number of initiatives on the roadmap.
    pub fn len(&self) -> usize {
        self.state
            .read()
            .expect("roadmap lock poisoned")
            .initiatives
            .len()
    }

    /// Whether the roadmap is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RoadmapStore {
    fn default() -> Self {
        Self::new()
    }
}

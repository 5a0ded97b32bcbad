//! Export types for serializing graph and roadmap state.
//!
//! Flat, self-contained representations suitable for JSON handoff to other
//! tooling, plus a CSV writer for the roadmap. Layout positions are
//! presentation-only and deliberately left out of the graph export.

use serde::{Deserialize, Serialize};

use crate::error::{ArchiResult, ExportError};
use crate::graph::Graph;
use crate::roadmap::Initiative;

/// Exported node with its provenance and validation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeExport {
    /// Stable node id.
    pub id: String,
    /// Component kind (Capability, App, Infra).
    pub kind: String,
    /// Display name.
    pub label: String,
    /// Extraction confidence in [0, 1].
    pub confidence: f32,
    /// Human validation flag.
    pub validated: bool,
    /// Originating artifact or connector.
    pub source: String,
}

/// Exported edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeExport {
    /// Edge id.
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Optional relation label.
    pub label: Option<String>,
}

/// Full graph export: nodes, edges, and the version they were read at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    /// Store version at snapshot time.
    pub version: u64,
    pub nodes: Vec<NodeExport>,
    pub edges: Vec<EdgeExport>,
}

impl From<&Graph> for GraphExport {
    fn from(graph: &Graph) -> Self {
        Self {
            version: graph.version,
            nodes: graph
                .nodes
                .iter()
                .map(|n| NodeExport {
                    id: n.id.clone(),
                    kind: n.kind.to_string(),
                    label: n.label.clone(),
                    confidence: n.confidence,
                    validated: n.validated,
                    source: n.source.clone(),
                })
                .collect(),
            edges: graph
                .edges
                .iter()
                .map(|e| EdgeExport {
                    id: e.id.clone(),
                    source: e.source.clone(),
                    target: e.target.clone(),
                    label: e.label.clone(),
                })
                .collect(),
        }
    }
}

/// Serialize a graph snapshot as pretty JSON.
pub fn graph_to_json(graph: &Graph) -> ArchiResult<String> {
    serde_json::to_string_pretty(&GraphExport::from(graph)).map_err(|e| {
        ExportError::Json {
            message: e.to_string(),
        }
        .into()
    })
}

/// Serialize the roadmap as pretty JSON.
pub fn roadmap_to_json(initiatives: &[Initiative]) -> ArchiResult<String> {
    serde_json::to_string_pretty(initiatives).map_err(|e| {
        ExportError::Json {
            message: e.to_string(),
        }
        .into()
    })
}

/// Serialize the roadmap as CSV.
///
/// Dependencies are joined with `;` inside a single column so the row count
/// matches the initiative count.
pub fn roadmap_to_csv(initiatives: &[Initiative]) -> ArchiResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["id", "name", "wave", "cost_k", "risk", "dependencies", "compliant"])
        .map_err(csv_error)?;
    for initiative in initiatives {
        writer
            .write_record([
                initiative.id.clone(),
                initiative.name.clone(),
                initiative.wave.clone(),
                initiative.cost_k.to_string(),
                initiative.risk.to_string(),
                initiative.dependencies.join(";"),
                initiative.compliant.to_string(),
            ])
            .map_err(csv_error)?;
    }
    let bytes = writer.into_inner().map_err(|e| ExportError::Csv {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| {
        ExportError::Csv {
            message: e.to_string(),
        }
        .into()
    })
}

fn csv_error(e: csv::Error) -> crate::error::ArchiError {
    ExportError::Csv {
        message: e.to_string(),
    }
    .into()
}

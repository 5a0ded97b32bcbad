//! Evidence graph: the typed node/edge model shared by every consumer surface.
//!
//! Nodes represent architecture components discovered from evidence artifacts,
//! edges represent directed relations between them. The model is plain data —
//! all mutation goes through [`crate::store::GraphStore`], and all construction
//! goes through [`crate::extract`].

pub mod analytics;

use serde::{Deserialize, Serialize};

/// Classification of an architecture component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A business capability (e.g. "ERP Management", "CRM").
    Capability,
    /// An application or workload realizing a capability.
    App,
    /// Infrastructure hosting an application.
    Infra,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Capability => write!(f, "Capability"),
            NodeKind::App => write!(f, "App"),
            NodeKind::Infra => write!(f, "Infra"),
        }
    }
}

/// 2D layout coordinate. Presentation-only; carries no semantic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One architecture component discovered from evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier, unique within a graph. Used for deduplication
    /// and as edge endpoint.
    pub id: String,
    /// Component classification.
    pub kind: NodeKind,
    /// Human-readable display name.
    pub label: String,
    /// Extraction certainty in [0.0, 1.0]. Assigned once at creation,
    /// never recomputed.
    pub confidence: f32,
    /// Whether a human has confirmed this node against evidence.
    /// Transitions only false → true; cleared only by a whole-graph reset.
    pub validated: bool,
    /// Provenance label: the artifact or connector this node came from.
    pub source: String,
    /// Layout coordinate for canvas rendering.
    pub position: Position,
}

impl Node {
    /// Create a new unvalidated node with full confidence at the origin.
    pub fn new(
        id: impl Into<String>,
        kind: NodeKind,
        label: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            confidence: 1.0,
            validated: false,
            source: source.into(),
            position: Position::default(),
        }
    }

    /// Set the confidence score, clamped to [0.0, 1.0].
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Set the layout position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// Directed relation between two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier, derived from the endpoint ids.
    pub id: String,
    /// Source node id. Must exist in the same graph.
    pub source: String,
    /// Target node id. Must exist in the same graph.
    pub target: String,
    /// Optional relation label (e.g. an integration mechanism).
    pub label: Option<String>,
    /// Display hint: render the edge animated on the canvas.
    pub animated: bool,
}

impl Edge {
    /// Create an unlabeled edge between two node ids.
    ///
    /// The edge id follows the `e-{source}-{target}` convention.
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e-{source}-{target}"),
            source,
            target,
            label: None,
            animated: false,
        }
    }

    /// Set the relation label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the edge as animated.
    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }
}

/// The evidence graph: nodes, edges, and a monotonic change counter.
///
/// `version` increments on every accepted mutation and is the sole signal
/// consumers use to detect change — no deep equality checks required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub version: u64,
}

impl Graph {
    /// Create an empty graph at version 1.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            version: 1,
        }
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph holds no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Number of validated nodes.
    pub fn validated_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.validated).count()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

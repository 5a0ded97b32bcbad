//! Versioned graph store: single source of truth for the current evidence graph.
//!
//! The store owns the graph for its lifetime and mediates every mutation from
//! the consumer surfaces (canvas, evidence panel, canonical-model views).
//! Exactly three mutations exist: [`replace`], [`validate_one`], and
//! [`reset`]. All are synchronous and atomic with respect to each other, and
//! total — none can fail for any input.
//!
//! The store is an explicitly owned value, not a process-wide global: tests
//! and multi-session use can hold as many independent stores as they like.
//!
//! [`replace`]: GraphStore::replace
//! [`validate_one`]: GraphStore::validate_one
//! [`reset`]: GraphStore::reset

use std::sync::RwLock;

use dashmap::DashMap;

use crate::graph::{Edge, Graph, Node};

/// Dual-indexed graph store: locked state plus an id → position index for
/// O(1) node lookups.
pub struct GraphStore {
    state: RwLock<Graph>,
    node_index: DashMap<String, usize>,
}

impl GraphStore {
    /// Create a store holding an empty graph at version 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Graph::new()),
            node_index: DashMap::new(),
        }
    }

    /// Rebuild the id index from the node list. Callers must hold the write lock.
    fn reindex(&self, nodes: &[Node]) {
        self.node_index.clear();
        for (pos, node) in nodes.iter().enumerate() {
            self.node_index.insert(node.id.clone(), pos);
        }
    }

    /// Unconditionally overwrite the graph with a freshly extracted node/edge
    /// set. The version resets to 1.
    ///
    /// Referential integrity is the extractor's responsibility — the store
    /// trusts its caller and performs no validation here.
    pub fn replace(&self, nodes: Vec<Node>, edges: Vec<Edge>) {
        let mut state = self.state.write().expect("graph lock poisoned");
        self.reindex(&nodes);
        tracing::debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "replacing graph"
        );
        state.nodes = nodes;
        state.edges = edges;
        state.version = 1;
    }

    /// Mark the node with the given id as validated.
    ///
    /// Idempotent with respect to node state: re-validating an
    /// already-validated node changes nothing observable about the node but
    /// still increments the version. An unknown id is a silent no-op — no
    /// version bump, no error. Returns whether a node was touched.
    pub fn validate_one(&self, node_id: &str) -> bool {
        let mut state = self.state.write().expect("graph lock poisoned");
        let Some(pos) = self.node_index.get(node_id).map(|entry| *entry.value()) else {
            tracing::debug!(node_id, "validate on unknown node ignored");
            return false;
        };
        state.nodes[pos].validated = true;
        state.version += 1;
        tracing::debug!(node_id, version = state.version, "node validated");
        true
    }

    /// Clear the graph back to empty at version 1.
    pub fn reset(&self) {
        let mut state = self.state.write().expect("graph lock poisoned");
        self.node_index.clear();
        state.nodes.clear();
        state.edges.clear();
        state.version = 1;
        tracing::debug!("graph reset");
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    /// Snapshot of the current nodes.
    pub fn nodes(&self) -> Vec<Node> {
        self.state.read().expect("graph lock poisoned").nodes.clone()
    }

    /// Snapshot of the current edges.
    pub fn edges(&self) -> Vec<Edge> {
        self.state.read().expect("graph lock poisoned").edges.clone()
    }

    /// The current version counter.
    pub fn version(&self) -> u64 {
        self.state.read().expect("graph lock poisoned").version
    }

    /// Snapshot of the whole graph.
    pub fn snapshot(&self) -> Graph {
        self.state.read().expect("graph lock poisoned").clone()
    }

    /// Snapshot of a single node by id.
    pub fn node(&self, node_id: &str) -> Option<Node> {
        let state = self.state.read().expect("graph lock poisoned");
        self.node_index
            .get(node_id)
            .map(|entry| state.nodes[*entry.value()].clone())
    }

    /// Number of nodes currently held.
    pub fn node_count(&self) -> usize {
        self.state.read().expect("graph lock poisoned").nodes.len()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().expect("graph lock poisoned");
        f.debug_struct("GraphStore")
            .field("nodes", &state.nodes.len())
            .field("edges", &state.edges.len())
            .field("version", &state.version)
            .finish()
    }
}

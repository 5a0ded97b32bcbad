//! Graph analytics: degree summaries and isolation checks.
//!
//! All functions operate on a [`Graph`] snapshot by projecting it onto a
//! `petgraph::DiGraph` and return structured results sorted by relevance.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::Graph;

/// Degree metrics for a single node.
#[derive(Debug, Clone)]
pub struct DegreeSummary {
    /// The node this measurement belongs to.
    pub id: String,
    /// Number of incoming edges.
    pub in_degree: usize,
    /// Number of outgoing edges.
    pub out_degree: usize,
    /// Total degree (in + out).
    pub total: usize,
}

/// Project the evidence graph onto a petgraph `DiGraph`.
///
/// Edges whose endpoints are missing from the node list are skipped; the
/// extractor guarantees they never occur, but a projection must not panic
/// on arbitrary caller-supplied graphs.
fn project(graph: &Graph) -> (DiGraph<String, ()>, HashMap<&str, NodeIndex>) {
    let mut projected = DiGraph::with_capacity(graph.nodes.len(), graph.edges.len());
    let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(graph.nodes.len());
    for node in &graph.nodes {
        let idx = projected.add_node(node.id.clone());
        index.insert(node.id.as_str(), idx);
    }
    for edge in &graph.edges {
        if let (Some(&s), Some(&t)) = (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
            projected.add_edge(s, t, ());
        }
    }
    (projected, index)
}

/// Compute degree metrics for all nodes. Returns results sorted by total degree desc.
pub fn degree_summary(graph: &Graph) -> Vec<DegreeSummary> {
    let (projected, index) = project(graph);
    let mut results: Vec<DegreeSummary> = graph
        .nodes
        .iter()
        .map(|node| {
            let idx = index[node.id.as_str()];
            let in_degree = projected
                .neighbors_directed(idx, Direction::Incoming)
                .count();
            let out_degree = projected
                .neighbors_directed(idx, Direction::Outgoing)
                .count();
            DegreeSummary {
                id: node.id.clone(),
                in_degree,
                out_degree,
                total: in_degree + out_degree,
            }
        })
        .collect();
    results.sort_by(|a, b| b.total.cmp(&a.total));
    results
}

/// Ids of nodes with no incident edges, in graph order.
///
/// Isolated nodes usually mean an artifact mentioned a component without any
/// relation evidence — worth surfacing for review.
pub fn isolated_nodes(graph: &Graph) -> Vec<String> {
    let (projected, index) = project(graph);
    graph
        .nodes
        .iter()
        .filter(|node| {
            let idx = index[node.id.as_str()];
            projected.neighbors_undirected(idx).next().is_none()
        })
        .map(|node| node.id.clone())
        .collect()
}

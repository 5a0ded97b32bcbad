//! Text-to-graph extraction: turn a free-text evidence artifact into a
//! candidate node/edge set.
//!
//! Extraction evaluates a fixed, ordered list of trigger rules against a
//! case-insensitive scan of the artifact text. Each rule pairs a keyword
//! predicate with an action that synthesizes nodes (deduplicated by id) and
//! edges. Rule order matters: later rules may connect nodes that earlier
//! rules created.
//!
//! The pass is total — no input text can make it fail — and structurally
//! deterministic: for a fixed text, the set of node ids and edge endpoints is
//! always the same. Only per-node confidence and layout position are sampled,
//! within configured bounds.

pub mod rules;

use std::collections::HashMap;

use rand::Rng;

use crate::graph::{Edge, Node, NodeKind, Position};

/// Bounds for the sampled per-node fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Lower bound for sampled node confidence.
    pub confidence_low: f32,
    /// Upper bound for sampled node confidence.
    pub confidence_high: f32,
    /// Canvas width; node x positions are sampled in [0, width).
    pub canvas_width: f32,
    /// Canvas height; node y positions are sampled in [0, height).
    pub canvas_height: f32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            confidence_low: 0.75,
            confidence_high: 0.95,
            canvas_width: 400.0,
            canvas_height: 300.0,
        }
    }
}

/// A single extraction rule: a keyword predicate paired with a synthesis action.
///
/// A rule fires when any of its trigger keywords occurs in the lowercased
/// artifact text. Actions receive the in-progress [`GraphDraft`] and may
/// create nodes and edges; they see the effects of every earlier rule.
pub struct Rule {
    name: &'static str,
    triggers: &'static [&'static str],
    apply: fn(&mut GraphDraft),
}

impl Rule {
    /// Declare a rule. `triggers` are matched as lowercase substrings.
    pub fn new(
        name: &'static str,
        triggers: &'static [&'static str],
        apply: fn(&mut GraphDraft),
    ) -> Self {
        Self {
            name,
            triggers,
            apply,
        }
    }

    /// Rule name, for logging and introspection.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether any trigger keyword occurs in the lowercased text.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|kw| lowered.contains(kw))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("triggers", &self.triggers)
            .finish()
    }
}

/// In-progress extraction result with dedup-by-id node creation.
///
/// Rule actions build the graph through this draft. Nodes are created at most
/// once per id; edges are only accepted when both endpoints already exist, so
/// a finished draft can never contain a dangling edge.
pub struct GraphDraft {
    source: String,
    config: ExtractorConfig,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    seen: HashMap<String, usize>,
}

impl GraphDraft {
    fn new(source: &str, config: &ExtractorConfig) -> Self {
        Self {
            source: source.to_string(),
            config: config.clone(),
            nodes: Vec::new(),
            edges: Vec::new(),
            seen: HashMap::new(),
        }
    }

    /// Get or create a node by id, returning the id.
    ///
    /// On creation the node gets a confidence and position sampled within the
    /// configured bounds and the draft's source label. Re-requesting an
    /// existing id leaves the stored node untouched.
    pub fn ensure_node(
        &mut self,
        id: &str,
        kind: NodeKind,
        label: &str,
    ) -> String {
        if !self.seen.contains_key(id) {
            let mut rng = rand::thread_rng();
            let spread = self.config.confidence_high - self.config.confidence_low;
            let unit: f32 = rng.gen_range(0.0..1.0);
            let confidence = self.config.confidence_low + unit * spread;
            let position = Position::new(
                rng.gen_range(0.0..1.0f32) * self.config.canvas_width,
                rng.gen_range(0.0..1.0f32) * self.config.canvas_height,
            );
            let node = Node::new(id, kind, label, self.source.as_str())
                .with_confidence(confidence)
                .with_position(position);
            self.seen.insert(id.to_string(), self.nodes.len());
            self.nodes.push(node);
        }
        id.to_string()
    }

    /// Whether a node with the given id already exists in the draft.
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains_key(id)
    }

    /// Add an edge if both endpoints exist. Returns whether it was accepted.
    pub fn push_edge(&mut self, edge: Edge) -> bool {
        if self.contains(&edge.source) && self.contains(&edge.target) {
            self.edges.push(edge);
            true
        } else {
            tracing::debug!(
                edge = %edge.id,
                "dropping edge with missing endpoint"
            );
            false
        }
    }

    fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}

/// The text-to-graph extractor: an ordered rule list plus sampling bounds.
#[derive(Debug)]
pub struct Extractor {
    config: ExtractorConfig,
    rules: Vec<Rule>,
}

impl Extractor {
    /// Extractor with default bounds and the built-in rule set.
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Extractor with custom bounds and the built-in rule set.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            rules: rules::builtin_rules(),
        }
    }

    /// Append a rule. Rules evaluate in declaration order, so appended rules
    /// see every node the built-in rules created.
    pub fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// The configured sampling bounds.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract a candidate node/edge set from artifact text.
    ///
    /// Total: never fails, for any string input. Empty text (or text matching
    /// no rule) yields an empty result.
    pub fn extract(&self, text: &str, source: &str) -> (Vec<Node>, Vec<Edge>) {
        let lowered = text.to_lowercase();
        let mut draft = GraphDraft::new(source, &self.config);
        for rule in &self.rules {
            if rule.matches(&lowered) {
                tracing::debug!(rule = rule.name(), source, "extraction rule fired");
                (rule.apply)(&mut draft);
            }
        }
        tracing::info!(
            source,
            nodes = draft.nodes.len(),
            edges = draft.edges.len(),
            "extraction complete"
        );
        draft.into_parts()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::{APP_SAP, CAP_ERP};

    #[test]
    fn ensure_node_deduplicates() {
        let config = ExtractorConfig::default();
        let mut draft = GraphDraft::new("test", &config);
        draft.ensure_node("app_sap", NodeKind::App, "SAP S/4HANA");
        draft.ensure_node("app_sap", NodeKind::App, "SAP S/4HANA");
        assert_eq!(draft.nodes.len(), 1);
    }

    #[test]
    fn push_edge_rejects_missing_endpoints() {
        let config = ExtractorConfig::default();
        let mut draft = GraphDraft::new("test", &config);
        draft.ensure_node("a", NodeKind::App, "A");
        assert!(!draft.push_edge(Edge::between("a", "ghost")));
        assert!(!draft.push_edge(Edge::between("ghost", "a")));
        draft.ensure_node("b", NodeKind::App, "B");
        assert!(draft.push_edge(Edge::between("a", "b")));
        assert_eq!(draft.edges.len(), 1);
    }

    #[test]
    fn sampled_fields_stay_in_bounds() {
        let extractor = Extractor::new();
        for _ in 0..50 {
            let (nodes, _) = extractor.extract("We run SAP on AWS", "test");
            for node in &nodes {
                assert!(node.confidence >= 0.75 && node.confidence <= 0.95);
                assert!(node.position.x >= 0.0 && node.position.x < 400.0);
                assert!(node.position.y >= 0.0 && node.position.y < 300.0);
                assert!(!node.validated);
                assert_eq!(node.source, "test");
            }
        }
    }

    #[test]
    fn structure_is_deterministic_across_calls() {
        let extractor = Extractor::new();
        let text = "SAP on AWS EC2, Salesforce via Kafka";
        let (first_nodes, first_edges) = extractor.extract(text, "test");
        for _ in 0..10 {
            let (nodes, edges) = extractor.extract(text, "test");
            let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
            let first_ids: Vec<&str> = first_nodes.iter().map(|n| n.id.as_str()).collect();
            assert_eq!(ids, first_ids);
            let pairs: Vec<(&str, &str)> = edges
                .iter()
                .map(|e| (e.source.as_str(), e.target.as_str()))
                .collect();
            let first_pairs: Vec<(&str, &str)> = first_edges
                .iter()
                .map(|e| (e.source.as_str(), e.target.as_str()))
                .collect();
            assert_eq!(pairs, first_pairs);
        }
    }

    #[test]
    fn empty_text_yields_empty_result() {
        let extractor = Extractor::new();
        let (nodes, edges) = extractor.extract("", "test");
        assert!(nodes.is_empty());
        assert!(edges.is_empty());
    }

    #[test]
    fn unmatched_text_yields_empty_result() {
        let extractor = Extractor::new();
        let (nodes, edges) = extractor.extract("nothing relevant here", "test");
        assert!(nodes.is_empty());
        assert!(edges.is_empty());
    }

    #[test]
    fn appended_rule_sees_builtin_nodes() {
        fn tag_mainframe(draft: &mut GraphDraft) {
            let mf = draft.ensure_node("infra_mainframe", NodeKind::Infra, "z/OS Mainframe");
            if draft.contains(APP_SAP) {
                draft.push_edge(Edge::between(APP_SAP, mf));
            }
        }
        let mut extractor = Extractor::new();
        extractor.push_rule(Rule::new("mainframe", &["mainframe"], tag_mainframe));

        let (nodes, edges) = extractor.extract("SAP runs next to the mainframe", "test");
        assert!(nodes.iter().any(|n| n.id == "infra_mainframe"));
        assert!(nodes.iter().any(|n| n.id == CAP_ERP));
        assert!(
            edges
                .iter()
                .any(|e| e.source == APP_SAP && e.target == "infra_mainframe")
        );
    }
}

//! Engine facade: top-level API for the archigraph system.
//!
//! The `Engine` owns the extractor, the graph store, and the roadmap store,
//! and provides the public interface for ingesting evidence, validating
//! nodes, and inspecting state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArchiResult, EngineError};
use crate::extract::{Extractor, ExtractorConfig};
use crate::graph::analytics;
use crate::ingest::connectors::Connector;
use crate::ingest::{Artifact, read_artifact};
use crate::roadmap::RoadmapStore;
use crate::store::GraphStore;

/// Configuration for the archigraph engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lower bound for sampled node confidence.
    pub confidence_low: f32,
    /// Upper bound for sampled node confidence.
    pub confidence_high: f32,
    /// Canvas width for sampled layout positions.
    pub canvas_width: f32,
    /// Canvas height for sampled layout positions.
    pub canvas_height: f32,
    /// Size cap for file artifacts, in bytes.
    pub max_artifact_bytes: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_low: 0.75,
            confidence_high: 0.95,
            canvas_width: 400.0,
            canvas_height: 300.0,
            max_artifact_bytes: crate::ingest::DEFAULT_MAX_ARTIFACT_BYTES,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file. Missing fields take defaults.
    pub fn from_toml_file(path: &Path) -> ArchiResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| EngineError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| EngineError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.confidence_low)
            || !(0.0..=1.0).contains(&self.confidence_high)
            || self.confidence_low > self.confidence_high
        {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "confidence bounds must satisfy 0 <= low <= high <= 1, got [{}, {}]",
                    self.confidence_low, self.confidence_high
                ),
            });
        }
        if !(self.canvas_width > 0.0 && self.canvas_width.is_finite())
            || !(self.canvas_height > 0.0 && self.canvas_height.is_finite())
        {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "canvas dimensions must be positive and finite, got {}x{}",
                    self.canvas_width, self.canvas_height
                ),
            });
        }
        if self.max_artifact_bytes == 0 {
            return Err(EngineError::InvalidConfig {
                message: "max_artifact_bytes must be > 0".into(),
            });
        }
        Ok(())
    }
}

/// Counts from one ingestion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Provenance label of the ingested artifact.
    pub source: String,
    /// Nodes in the replaced graph.
    pub nodes: usize,
    /// Edges in the replaced graph.
    pub edges: usize,
}

impl std::fmt::Display for IngestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ingested {} node(s) and {} edge(s) from {}",
            self.nodes, self.edges, self.source
        )
    }
}

/// The archigraph engine.
///
/// Owns all subsystems: the rule-based extractor, the evidence graph store,
/// and the roadmap store.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    extractor: Extractor,
    graph: GraphStore,
    roadmap: RoadmapStore,
}

impl Engine {
    /// Create a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> ArchiResult<Self> {
        config.validate()?;

        tracing::info!(
            confidence_low = config.confidence_low,
            confidence_high = config.confidence_high,
            canvas_width = config.canvas_width,
            canvas_height = config.canvas_height,
            "initializing archigraph engine"
        );

        let extractor = Extractor::with_config(ExtractorConfig {
            confidence_low: config.confidence_low,
            confidence_high: config.confidence_high,
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
        });

        Ok(Self {
            config,
            extractor,
            graph: GraphStore::new(),
            roadmap: RoadmapStore::seeded(),
        })
    }

    /// Extract a graph from an artifact and replace the store contents.
    ///
    /// Replace happens at most once per ingestion, after the full payload is
    /// assembled — there are no partial graphs.
    pub fn ingest_artifact(&self, artifact: &Artifact) -> IngestOutcome {
        let (nodes, edges) = self.extractor.extract(&artifact.text, &artifact.source);
        let outcome = IngestOutcome {
            source: artifact.source.clone(),
            nodes: nodes.len(),
            edges: edges.len(),
        };
        self.graph.replace(nodes, edges);
        outcome
    }

    /// Ingest inline text under a source label.
    pub fn ingest_text(&self, text: &str, source: &str) -> IngestOutcome {
        self.ingest_artifact(&Artifact::new(text, source))
    }

    /// Ingest a file artifact, enforcing the configured size cap.
    pub fn ingest_file(&self, path: &Path) -> ArchiResult<IngestOutcome> {
        let artifact = read_artifact(path, self.config.max_artifact_bytes)?;
        Ok(self.ingest_artifact(&artifact))
    }

    /// Fetch a connector payload and ingest it.
    pub fn ingest_connector(&self, connector: Connector) -> IngestOutcome {
        self.ingest_artifact(&connector.fetch())
    }

    /// Mark a node as validated. Returns whether the node existed.
    pub fn validate_node(&self, node_id: &str) -> bool {
        self.graph.validate_one(node_id)
    }

    /// Clear the evidence graph.
    pub fn reset_graph(&self) {
        self.graph.reset();
    }

    /// The evidence graph store.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// The roadmap store.
    pub fn roadmap(&self) -> &RoadmapStore {
        &self.roadmap
    }

    /// The extractor, mutable for rule extension.
    pub fn extractor_mut(&mut self) -> &mut Extractor {
        &mut self.extractor
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Summarize current engine state.
    pub fn info(&self) -> EngineInfo {
        let snapshot = self.graph.snapshot();
        EngineInfo {
            graph_version: snapshot.version,
            node_count: snapshot.node_count(),
            edge_count: snapshot.edge_count(),
            validated_count: snapshot.validated_count(),
            isolated_count: analytics::isolated_nodes(&snapshot).len(),
            roadmap_version: self.roadmap.version(),
            initiative_count: self.roadmap.len(),
        }
    }
}

/// Summary information about the engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    pub graph_version: u64,
    pub node_count: usize,
    pub edge_count: usize,
    pub validated_count: usize,
    pub isolated_count: usize,
    pub roadmap_version: u64,
    pub initiative_count: usize,
}

impl std::fmt::Display for EngineInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "archigraph engine info")?;
        writeln!(f, "  graph version:   {}", self.graph_version)?;
        writeln!(f, "  nodes:           {}", self.node_count)?;
        writeln!(f, "  edges:           {}", self.edge_count)?;
        writeln!(f, "  validated:       {}", self.validated_count)?;
        writeln!(f, "  isolated:        {}", self.isolated_count)?;
        writeln!(f, "  roadmap version: {}", self.roadmap_version)?;
        writeln!(f, "  initiatives:     {}", self.initiative_count)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_engine() -> Engine {
        Engine::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn create_engine_with_defaults() {
        let engine = test_engine();
        let info = engine.info();
        assert_eq!(info.node_count, 0);
        assert_eq!(info.graph_version, 1);
        assert_eq!(info.initiative_count, 5);
    }

    #[test]
    fn inverted_confidence_bounds_rejected() {
        let result = Engine::new(EngineConfig {
            confidence_low: 0.9,
            confidence_high: 0.5,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn zero_canvas_rejected() {
        let result = Engine::new(EngineConfig {
            canvas_width: 0.0,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn ingest_text_replaces_graph() {
        let engine = test_engine();
        let outcome = engine.ingest_text("We use SAP S/4HANA", "notes.txt");
        assert_eq!(outcome.nodes, 2);
        assert_eq!(outcome.edges, 1);
        assert_eq!(engine.graph().node_count(), 2);
        assert_eq!(engine.graph().version(), 1);
    }

    #[test]
    fn ingest_connector_builds_full_landscape() {
        let engine = test_engine();
        let outcome = engine.ingest_connector(Connector::Confluence);
        assert_eq!(outcome.source, "Confluence");
        assert_eq!(outcome.nodes, 5);
        assert_eq!(outcome.edges, 4);
    }

    #[test]
    fn validate_and_info() {
        let engine = test_engine();
        engine.ingest_connector(Connector::Confluence);
        assert!(engine.validate_node("app_sap"));
        assert!(!engine.validate_node("app_ghost"));

        let info = engine.info();
        assert_eq!(info.validated_count, 1);
        assert_eq!(info.graph_version, 2);
        assert_eq!(info.isolated_count, 0);
    }

    #[test]
    fn config_from_toml_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("archigraph.toml");
        std::fs::write(&path, "confidence_low = 0.5\ncanvas_width = 800.0\n").unwrap();

        let config = EngineConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.confidence_low, 0.5);
        assert_eq!(config.canvas_width, 800.0);
        // Unspecified fields keep their defaults.
        assert_eq!(config.confidence_high, 0.95);
    }

    #[test]
    fn malformed_toml_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "confidence_low = [not toml").unwrap();
        assert!(EngineConfig::from_toml_file(&path).is_err());
    }

    #[test]
    fn engine_info_display() {
        let engine = test_engine();
        engine.ingest_text("sap", "t");
        let rendered = engine.info().to_string();
        assert!(rendered.contains("nodes:           2"));
        assert!(rendered.contains("graph version:   1"));
    }
}

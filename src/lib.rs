//! # archigraph
//!
//! An evidence-graph engine for enterprise architecture discovery: free-text
//! artifacts go in, a typed component graph with per-node confidence and
//! human validation state comes out.
//!
//! ## Architecture
//!
//! - **Graph model** (`graph`): typed node/edge model plus petgraph-backed analytics
//! - **Extraction** (`extract`): ordered keyword-trigger rules with dedup-by-id synthesis
//! - **Store** (`store`): versioned single-owner state container for the graph
//! - **Ingest** (`ingest`): file artifacts (size-capped) and mock connectors
//! - **Roadmap** (`roadmap`): migration initiatives, wave policy, mock optimizer
//! - **Export** (`export`): JSON graph handoff, JSON/CSV roadmap export
//!
//! ## Library usage
//!
//! ```
//! use archigraph::engine::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default()).unwrap();
//! engine.ingest_text("We use SAP S/4HANA on AWS EC2", "notes.txt");
//! engine.validate_node("app_sap");
//! assert_eq!(engine.graph().version(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod export;
pub mod extract;
pub mod graph;
pub mod ingest;
pub mod roadmap;
pub mod store;
pub mod telemetry;

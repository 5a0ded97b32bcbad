//! Rich diagnostic error types for the archigraph engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains. The graph core itself is
//! total — errors only arise at the edges: artifact I/O, export serialization,
//! and configuration.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the archigraph engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text, source spans) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum ArchiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),
}

// ---------------------------------------------------------------------------
// Ingest errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum IngestError {
    #[error("failed to read artifact {}: {source}", path.display())]
    #[diagnostic(
        code(archi::ingest::io),
        help(
            "A filesystem operation failed. Check that the file exists, \
             is readable, and is valid UTF-8 text."
        )
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact {} is {size} bytes, over the {limit} byte limit", path.display())]
    #[diagnostic(
        code(archi::ingest::too_large),
        help(
            "Evidence artifacts are capped to keep extraction interactive. \
             Split the document into smaller files, or raise \
             `max_artifact_bytes` in the engine configuration."
        )
    )]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("unknown connector: {name}")]
    #[diagnostic(
        code(archi::ingest::unknown_connector),
        help(
            "Available connectors: confluence, jira, aws. \
             List them with `archigraph connector list`."
        )
    )]
    UnknownConnector { name: String },
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("JSON serialization error: {message}")]
    #[diagnostic(
        code(archi::export::json),
        help(
            "Failed to serialize the export payload to JSON. \
             This indicates a bug in the export types — please file a report."
        )
    )]
    Json { message: String },

    #[error("CSV serialization error: {message}")]
    #[diagnostic(
        code(archi::export::csv),
        help("Failed to write the CSV export. Check that field values contain valid UTF-8.")
    )]
    Csv { message: String },
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    #[error("invalid configuration: {message}")]
    #[diagnostic(
        code(archi::engine::invalid_config),
        help("Check the EngineConfig fields. {message}")
    )]
    InvalidConfig { message: String },

    #[error("failed to load configuration from {}: {message}", path.display())]
    #[diagnostic(
        code(archi::engine::config_file),
        help(
            "The configuration file could not be read or parsed. \
             Ensure the path exists and contains valid TOML."
        )
    )]
    ConfigFile { path: PathBuf, message: String },
}

/// Convenience alias for functions returning archigraph results.
pub type ArchiResult<T> = std::result::Result<T, ArchiError>;

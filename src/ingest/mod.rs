//! Artifact ingestion: the text payloads fed into extraction.
//!
//! An [`Artifact`] is the unit handed to the extractor: the full text of an
//! evidence document plus a provenance label. Files are read whole with a
//! size cap — extraction is interactive, and huge documents belong in a
//! chunking pipeline, not here.

pub mod connectors;

use std::path::Path;

use crate::error::{ArchiResult, IngestError};

/// Default cap on artifact size: 2 MiB.
pub const DEFAULT_MAX_ARTIFACT_BYTES: u64 = 2 * 1024 * 1024;

/// A text evidence payload with its provenance label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Full artifact text (UTF-8).
    pub text: String,
    /// Provenance label: originating document or connector name.
    pub source: String,
}

impl Artifact {
    /// Create an artifact from text and a source label.
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// Read a file into an artifact, enforcing the size cap.
///
/// The source label is the file name (falling back to the full path for
/// pathological paths). Fails with a diagnostic on I/O errors, non-UTF-8
/// content, or oversize files.
pub fn read_artifact(path: &Path, max_bytes: u64) -> ArchiResult<Artifact> {
    let meta = std::fs::metadata(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if meta.len() > max_bytes {
        return Err(IngestError::TooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            limit: max_bytes,
        }
        .into());
    }

    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::info!(path = %path.display(), bytes = meta.len(), "artifact read");
    Ok(Artifact::new(text, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArchiError;

    #[test]
    fn read_small_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("evidence.txt");
        std::fs::write(&path, "We use SAP S/4HANA on AWS.").unwrap();

        let artifact = read_artifact(&path, DEFAULT_MAX_ARTIFACT_BYTES).unwrap();
        assert_eq!(artifact.source, "evidence.txt");
        assert!(artifact.text.contains("SAP"));
    }

    #[test]
    fn oversize_file_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("big.txt");
        std::fs::write(&path, "x".repeat(64)).unwrap();

        let err = read_artifact(&path, 16).unwrap_err();
        assert!(matches!(
            err,
            ArchiError::Ingest(IngestError::TooLarge { size: 64, limit: 16, .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err =
            read_artifact(Path::new("/nonexistent/evidence.txt"), 1024).unwrap_err();
        assert!(matches!(err, ArchiError::Ingest(IngestError::Io { .. })));
    }
}

//! Persistence of finished documents.

use crate::backend::{DocumentBackend, OutputFormat};
use crate::error::{Error, Result};
use crate::model::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistReport {
    /// Destination path
    pub path: PathBuf,

    /// Format the backend produced
    pub format: OutputFormat,

    /// Number of bytes written
    pub bytes: usize,
}

/// Render `doc` through `backend` and write it to `path`.
///
/// The document is consumed, and `Document` is not `Clone`, so each
/// document yields at most one artifact. The artifact is rendered in
/// memory first, written to a temporary file next to the destination and
/// renamed into place, so either the complete file appears or nothing
/// does. The destination directory must already exist.
pub fn persist<P: AsRef<Path>>(
    doc: Document,
    path: P,
    backend: &dyn DocumentBackend,
) -> Result<PersistReport> {
    let path = path.as_ref();
    let bytes = backend.render(&doc)?;
    drop(doc);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(&bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| Error::Io(e.error))?;

    log::info!(
        "Wrote {} ({}, {} bytes) via {} backend",
        path.display(),
        backend.format(),
        bytes.len(),
        backend.name()
    );

    Ok(PersistReport {
        path: path.to_path_buf(),
        format: backend.format(),
        bytes: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MarkdownBackend, TextBackend};
    use crate::compose::DocumentBuilder;
    use crate::model::{HeadingLevel, StyleSheet};
    use tempfile::tempdir;

    fn sample() -> Document {
        let mut b = DocumentBuilder::new(StyleSheet::default()).unwrap();
        b.heading("Summary", HeadingLevel::One).paragraph("Body");
        b.finish()
    }

    #[test]
    fn test_persist_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.md");

        let report = persist(sample(), &path, &MarkdownBackend::default()).unwrap();

        assert_eq!(report.path, path);
        assert_eq!(report.format, OutputFormat::Markdown);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.len(), report.bytes);
        assert!(written.starts_with("# Summary"));
    }

    #[test]
    fn test_persist_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();

        persist(sample(), &path, &TextBackend::new()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Summary"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_persist_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");

        let result = persist(sample(), &path, &TextBackend::new());

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!path.exists());
        assert!(!dir.path().join("missing").exists());
    }
}

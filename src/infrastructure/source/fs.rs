//! File system document source
//!
//! Resolves layer source paths against a data root directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::entities::GeoDocument;
use crate::domain::ports::{DocumentSource, LoadError};

#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        }
    }
}

#[async_trait]
impl DocumentSource for FsDocumentSource {
    async fn fetch_document(&self, path: &str) -> Result<GeoDocument, LoadError> {
        let full = self.resolve(path);
        let location = full.display().to_string();
        let bytes = tokio::fs::read(&full).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound {
                location: location.clone(),
            },
            _ => LoadError::Io {
                location: location.clone(),
                message: e.to_string(),
            },
        })?;
        GeoDocument::from_slice(&bytes).map_err(|e| LoadError::document(location, e))
    }

    fn origin(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn reads_relative_to_root() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("mdr")).unwrap();
        std::fs::write(
            dir.path().join("mdr/1_anker.geojson"),
            r#"{"type": "FeatureCollection", "features": []}"#,
        )
        .unwrap();

        let source = FsDocumentSource::new(dir.path());
        let doc = source.fetch_document("mdr/1_anker.geojson").await.unwrap();
        assert!(doc.features().is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let source = FsDocumentSource::new(dir.path());
        let err = source.fetch_document("nope.geojson").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[tokio::test]
    async fn parse_failure_names_the_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("bad.geojson"), "{\"type\": \"Feature\"}").unwrap();
        let source = FsDocumentSource::new(dir.path());
        let err = source.fetch_document("bad.geojson").await.unwrap_err();
        assert!(matches!(err, LoadError::Document { .. }));
        assert!(err.to_string().contains("bad.geojson"));
    }
}

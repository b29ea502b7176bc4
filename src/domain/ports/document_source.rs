//! DocumentSource port
//!
//! Fetches and parses the geographic document behind a layer's `source_path`.
//! Calls are independent: one failing or slow fetch never affects another.

use async_trait::async_trait;

use crate::domain::entities::{DocumentError, GeoDocument};

#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_document(&self, path: &str) -> Result<GeoDocument, LoadError>;

    /// Human-readable origin (directory or base URL) for logs.
    fn origin(&self) -> String;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("source not found: {location}")]
    NotFound { location: String },

    #[error("failed to read {location}: {message}")]
    Io { location: String, message: String },

    #[error("request for {location} failed with HTTP {status}")]
    HttpStatus { location: String, status: u16 },

    #[error("request for {location} failed: {message}")]
    Request { location: String, message: String },

    #[error("{location}: {source}")]
    Document {
        location: String,
        source: DocumentError,
    },
}

impl LoadError {
    pub fn document(location: impl Into<String>, source: DocumentError) -> Self {
        LoadError::Document {
            location: location.into(),
            source,
        }
    }
}

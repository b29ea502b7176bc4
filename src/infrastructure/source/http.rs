//! HTTP document source
//!
//! Fetches layer sources relative to a base URL, the way the browser build served
//! them from its static `data/` directory.

use async_trait::async_trait;

use crate::domain::entities::GeoDocument;
use crate::domain::ports::{DocumentSource, LoadError};

#[derive(Debug, Clone)]
pub struct HttpDocumentSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch_document(&self, path: &str) -> Result<GeoDocument, LoadError> {
        let url = self.url_for(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| request_error(&url, e))?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound { location: url });
        }
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                location: url,
                status: status.as_u16(),
            });
        }
        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !content_type.contains("json") && !content_type.contains("text/plain") {
                tracing::warn!(url = %url, content_type, "unexpected content type");
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| request_error(&url, e))?;
        GeoDocument::from_slice(&bytes).map_err(|e| LoadError::document(url, e))
    }

    fn origin(&self) -> String {
        self.base_url.clone()
    }
}

fn request_error(url: &str, e: reqwest::Error) -> LoadError {
    LoadError::Request {
        location: url.to_string(),
        message: e.to_string(),
    }
}

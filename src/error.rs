//! Error types for Geostage
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ScriptError;
use crate::domain::entities::CatalogError;

/// Result type alias for Geostage operations
pub type GeostageResult<T> = Result<T, GeostageError>;

/// Main error type for Geostage operations
#[derive(Error, Debug)]
pub enum GeostageError {
    /// Config file is not valid TOML or has wrongly typed values
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Config file given explicitly does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// A config value is syntactically fine but unusable
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Layer table is inconsistent
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Session script could not be parsed
    #[error("script error: {0}")]
    Script(#[from] ScriptError),

    /// Building the HTTP client failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

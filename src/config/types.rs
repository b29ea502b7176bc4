//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::EngineOptions;
use crate::domain::entities::{LayerCatalog, LayerDescriptor};
use crate::domain::policies::ActivationPolicy;
use crate::domain::ports::DocumentSource;
use crate::domain::value_objects::{FitPadding, GeometryKind, LayerCategory, LatLng};
use crate::error::GeostageResult;
use crate::infrastructure::{FsDocumentSource, HttpDocumentSource};

use super::loader::{self, ConfigWarning};

/// Initial map view and fitting behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// `[lat, lng]`
    #[serde(default = "default_center")]
    pub center: [f64; 2],

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Pixels of inset on every side when fitting bounds
    #[serde(default = "default_fit_padding")]
    pub fit_padding: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            fit_padding: default_fit_padding(),
        }
    }
}

impl MapConfig {
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: self.center[0],
            lng: self.center[1],
        }
    }
}

fn default_center() -> [f64; 2] {
    [52.1205, 11.6276]
}

fn default_zoom() -> u8 {
    13
}

fn default_fit_padding() -> u32 {
    50
}

/// Activation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActivationConfig {
    #[serde(default)]
    pub policy: ActivationPolicy,
}

/// Where layer documents come from.
///
/// `base_url` wins over `root` when both are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_root")]
    pub root: PathBuf,

    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: default_data_root(),
            base_url: None,
        }
    }
}

impl DataConfig {
    /// Human-readable origin, for log lines and reports
    pub fn origin(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => self.root.display().to_string(),
        }
    }
}

fn default_data_root() -> PathBuf {
    PathBuf::from("data")
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. `info` or `geostage=debug`
    #[serde(default)]
    pub level: Option<String>,
}

/// One `[[layers]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerConfig {
    pub name: String,
    pub location: String,
    pub category: LayerCategory,
    #[serde(default)]
    pub geometry: Option<GeometryKind>,
    pub path: String,
}

impl LayerConfig {
    pub fn to_descriptor(&self) -> LayerDescriptor {
        let descriptor = LayerDescriptor::new(
            self.name.as_str(),
            self.location.as_str(),
            self.category,
            self.path.as_str(),
        );
        match self.geometry {
            Some(geometry) => descriptor.with_geometry(geometry),
            None => descriptor,
        }
    }
}

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub activation: ActivationConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GeostageResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GeostageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Configured layer table, or the built-in one when none is configured
    pub fn catalog(&self) -> GeostageResult<LayerCatalog> {
        if self.layers.is_empty() {
            return Ok(LayerCatalog::builtin());
        }
        let descriptors = self.layers.iter().map(LayerConfig::to_descriptor).collect();
        Ok(LayerCatalog::new(descriptors)?)
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            policy: self.activation.policy,
            padding: FitPadding::uniform(self.map.fit_padding),
        }
    }

    /// Document source for the `[data]` section: HTTP when `base_url` is set,
    /// the filesystem otherwise.
    pub fn document_source(&self) -> GeostageResult<Arc<dyn DocumentSource>> {
        match &self.data.base_url {
            Some(base_url) => {
                let client = reqwest::Client::builder()
                    .user_agent(concat!("geostage/", env!("CARGO_PKG_VERSION")))
                    .timeout(HTTP_TIMEOUT)
                    .build()?;
                Ok(Arc::new(HttpDocumentSource::with_client(
                    client,
                    base_url.as_str(),
                )))
            }
            None => Ok(Arc::new(FsDocumentSource::new(self.data.root.clone()))),
        }
    }
}

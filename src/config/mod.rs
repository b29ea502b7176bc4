//! Configuration module for Geostage
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GEOSTAGE_*)
//! 3. Working-directory config (./geostage.toml) or `--config` file
//! 4. User config (<config dir>/geostage/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{discover, user_config_path, ConfigWarning, LoadedConfig, LOCAL_CONFIG_FILE};
pub use types::{
    ActivationConfig, Config, DataConfig, LayerConfig, LoggingConfig, MapConfig,
};

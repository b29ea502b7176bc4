//! Configuration loading and discovery

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GeostageError, GeostageResult};

use super::types::Config;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "geostage.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Result of config discovery
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the config came from; `None` means built-in defaults
    pub path: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GeostageResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GeostageError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config to use: `explicit` if given (it must exist), else
/// `./geostage.toml`, else the user config, else defaults. Env overrides are
/// applied last.
pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> GeostageResult<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(GeostageError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return load_from(path);
    }

    for candidate in candidate_paths(working_dir) {
        if candidate.exists() {
            return load_from(&candidate);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        ..LoadedConfig::default()
    })
}

fn load_from(path: &Path) -> GeostageResult<LoadedConfig> {
    let (config, warnings) = load_with_warnings(path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        warnings,
        path: Some(path.to_path_buf()),
    })
}

/// Apply environment variable overrides (GEOSTAGE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // GEOSTAGE_DATA_ROOT
    if let Some(root) = var("GEOSTAGE_DATA_ROOT").filter(|v| !v.is_empty()) {
        config.data.root = PathBuf::from(root);
    }

    // GEOSTAGE_BASE_URL
    if let Some(url) = var("GEOSTAGE_BASE_URL").filter(|v| !v.is_empty()) {
        config.data.base_url = Some(url);
    }

    // GEOSTAGE_ACTIVATION_POLICY
    if let Some(policy) = var("GEOSTAGE_ACTIVATION_POLICY") {
        match policy.parse() {
            Ok(policy) => config.activation.policy = policy,
            Err(_) => tracing::warn!(value = %policy, "ignoring unknown GEOSTAGE_ACTIVATION_POLICY"),
        }
    }

    // GEOSTAGE_LOG
    if let Some(level) = var("GEOSTAGE_LOG").filter(|v| !v.is_empty()) {
        config.logging.level = Some(level);
    }

    config
}

fn candidate_paths(working_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![working_dir.join(LOCAL_CONFIG_FILE)];
    candidates.extend(user_config_path());
    candidates
}

/// `<config dir>/geostage/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("geostage").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "map",
        "center",
        "zoom",
        "fit_padding",
        "activation",
        "policy",
        "data",
        "root",
        "base_url",
        "logging",
        "level",
        "layers",
        "name",
        "location",
        "category",
        "geometry",
        "path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}

//! Configuration System
//!
//! Explicit configuration for the engine and CLI: scan root, baseline
//! location, scanner settings, and logging. Loaded from an optional TOML file
//! with `VIGIL_*` environment overrides; every field has a serde default so a
//! bare invocation works without any file.

use crate::error::EngineError;
use crate::logging::LoggingConfig;
use crate::scan::WalkerConfig;
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VigilConfig {
    /// Directory tree to scan (the CLI falls back to the current directory)
    pub root: Option<PathBuf>,

    /// Baseline file path (defaults to the per-root XDG data location)
    pub baseline_path: Option<PathBuf>,

    /// Scanner settings
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scanner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Follow symbolic links during traversal
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Directory or file names to skip (empty: scan every regular file)
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Maximum traversal depth
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl ScannerConfig {
    /// Walker settings for the scan layer.
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.follow_symlinks,
            ignore_names: self.ignore.clone(),
            max_depth: self.max_depth,
        }
    }
}

impl VigilConfig {
    /// Load configuration from an optional TOML file plus environment
    /// overrides (`VIGIL_ROOT`, `VIGIL_BASELINE_PATH`, `VIGIL_LOGGING__LEVEL`,
    /// double underscore for nesting).
    pub fn load(path: Option<&Path>) -> Result<Self, EngineError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path.to_path_buf()));
        }
        let cfg = builder
            .add_source(Environment::with_prefix("VIGIL").separator("__"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

/// Default baseline path for a scan root.
///
/// Resolves to `<XDG data dir>/vigil/baselines/<key>.json` where the key is
/// derived from the canonicalized root, so two roots never share a baseline
/// by accident.
pub fn default_baseline_path(root: &Path) -> Result<PathBuf, EngineError> {
    let dirs = ProjectDirs::from("", "", "vigil").ok_or_else(|| {
        EngineError::ConfigError(
            "Could not determine a data directory for the default baseline".to_string(),
        )
    })?;

    let canonical = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let digest = blake3::hash(canonical.to_string_lossy().as_bytes());
    let key = hex::encode(&digest.as_bytes()[..8]);

    Ok(dirs.data_dir().join("baselines").join(format!("{}.json", key)))
}

//! Snapshot assembly: walk the tree and digest every file

use crate::error::ScanError;
use crate::scan::{digest, Walker, WalkerConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace};

/// Mapping from root-relative path to lowercase hex content digest.
///
/// Rebuilt in full on every scan; each build fully supersedes prior state.
/// Comparison is order-independent, but the map keeps keys sorted so that
/// iteration and serialized output are reproducible. Serializes as a plain
/// JSON object, which is also the persisted baseline format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<String, String>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the digest for a relative path, replacing any prior value.
    pub fn insert(&mut self, rel_path: String, digest_hex: String) {
        self.entries.insert(rel_path, digest_hex);
    }

    /// Digest hex for a relative path, if present.
    pub fn digest_for(&self, rel_path: &str) -> Option<&str> {
        self.entries.get(rel_path).map(String::as_str)
    }

    pub fn contains(&self, rel_path: &str) -> bool {
        self.entries.contains_key(rel_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in sorted path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }
}

impl FromIterator<(String, String)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Builds a snapshot by composing the walker with the digest engine.
pub struct SnapshotBuilder {
    root: PathBuf,
    walker_config: Option<WalkerConfig>,
}

impl SnapshotBuilder {
    /// Create a new snapshot builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            walker_config: None,
        }
    }

    /// Set walker config (ignore names, symlinks, depth). When set, the walker
    /// uses this config instead of the default.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Walk the tree and digest every regular file.
    ///
    /// Fail-fast: the first file that cannot be read aborts the whole build
    /// with that file's path attached. No partial snapshot is produced.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Snapshot, ScanError> {
        let start = Instant::now();
        info!("Starting snapshot build");

        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(self.root.clone(), config.clone()),
            None => Walker::new(self.root.clone()),
        };
        let files = match walker.walk() {
            Ok(f) => {
                debug!(file_count = f.len(), "Walked filesystem");
                f
            }
            Err(e) => {
                error!("Filesystem walk failed: {}", e);
                return Err(e);
            }
        };

        let mut snapshot = Snapshot::new();
        for file in &files {
            let digest = digest::digest_file(&file.abs_path)?;
            trace!(path = %file.rel_path, digest = %digest::digest_hex(&digest), "Hashed file");
            snapshot.insert(file.rel_path.clone(), digest::digest_hex(&digest));
        }

        let duration = start.elapsed();
        info!(
            file_count = snapshot.len(),
            duration_ms = duration.as_millis(),
            "Snapshot build completed"
        );

        Ok(snapshot)
    }
}

//! Engine facade: the snapshot and verify operations
//!
//! The two user-triggered operations are independent and idempotent. Snapshot
//! replaces the baseline wholesale; verify classifies the current tree against
//! it without mutating anything. Both run to completion or fail outright with
//! a typed error.

use crate::baseline::BaselineStore;
use crate::compare::{compare, ChangeRecord};
use crate::error::EngineError;
use crate::scan::WalkerConfig;
use crate::snapshot::{Snapshot, SnapshotBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Explicit engine configuration. Passed in by the caller; the engine keeps
/// no process-wide state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory tree to scan
    pub root: PathBuf,
    /// File path of the persisted baseline
    pub baseline_path: PathBuf,
    /// Walker settings (ignore names, symlinks, depth)
    pub walker: WalkerConfig,
}

impl EngineConfig {
    pub fn new(root: PathBuf, baseline_path: PathBuf) -> Self {
        Self {
            root,
            baseline_path,
            walker: WalkerConfig::default(),
        }
    }
}

/// Result of a successful snapshot operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotSummary {
    /// Number of files hashed into the baseline
    pub file_count: usize,
    /// Where the baseline was written
    pub baseline_path: PathBuf,
    /// Capture time
    pub taken_at: DateTime<Utc>,
}

/// Result of a successful verify operation: one record per scanned path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyReport {
    pub records: Vec<ChangeRecord>,
}

impl VerifyReport {
    /// Records for files that are new or modified since the baseline.
    pub fn changes(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.records.iter().filter(|r| r.is_change())
    }

    pub fn change_count(&self) -> usize {
        self.changes().count()
    }

    /// True when every scanned file matches the baseline.
    pub fn is_clean(&self) -> bool {
        self.records.iter().all(|r| !r.is_change())
    }

    pub fn file_count(&self) -> usize {
        self.records.len()
    }
}

/// Integrity engine: owns the baseline store and runs the two operations
/// against a configured scan root.
pub struct IntegrityEngine {
    config: EngineConfig,
    store: BaselineStore,
}

impl IntegrityEngine {
    pub fn new(config: EngineConfig) -> Self {
        let store = BaselineStore::new(&config.baseline_path);
        Self { config, store }
    }

    /// Directory tree this engine scans.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// File path of the persisted baseline.
    pub fn baseline_path(&self) -> &Path {
        self.store.path()
    }

    fn build_snapshot(&self) -> Result<Snapshot, EngineError> {
        let snapshot = SnapshotBuilder::new(self.config.root.clone())
            .with_walker_config(self.config.walker.clone())
            .build()?;
        Ok(snapshot)
    }

    /// Scan the tree, digest every file, and replace the baseline.
    #[instrument(skip(self), fields(root = %self.config.root.display()))]
    pub fn snapshot(&self) -> Result<SnapshotSummary, EngineError> {
        let snapshot = self.build_snapshot()?;
        self.store.persist(&snapshot)?;

        info!(file_count = snapshot.len(), "Baseline replaced");
        Ok(SnapshotSummary {
            file_count: snapshot.len(),
            baseline_path: self.store.path().to_path_buf(),
            taken_at: Utc::now(),
        })
    }

    /// Load the baseline, rescan the tree, and classify every scanned path.
    ///
    /// Fails fast with `BaselineNotFound` before scanning when no snapshot has
    /// been taken. Never mutates the baseline.
    #[instrument(skip(self), fields(root = %self.config.root.display()))]
    pub fn verify(&self) -> Result<VerifyReport, EngineError> {
        let baseline = self.store.load()?;
        let fresh = self.build_snapshot()?;
        let records = compare(&baseline, &fresh);

        info!(
            file_count = records.len(),
            changed = records.iter().filter(|r| r.is_change()).count(),
            "Verify completed"
        );
        Ok(VerifyReport { records })
    }
}

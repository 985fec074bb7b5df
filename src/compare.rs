//! Baseline comparison: classify each scanned path against a baseline

use crate::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

/// Classification of one scanned path against the baseline.
///
/// Every path in the fresh snapshot yields exactly one record. Paths present
/// only in the baseline (deleted files) are not represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "path", rename_all = "snake_case")]
pub enum ChangeRecord {
    /// Digest matches the baseline entry
    Unchanged(String),
    /// Path present in the baseline with a different digest
    Modified(String),
    /// Path absent from the baseline
    New(String),
}

impl ChangeRecord {
    /// The relative path this record classifies.
    pub fn path(&self) -> &str {
        match self {
            ChangeRecord::Unchanged(path)
            | ChangeRecord::Modified(path)
            | ChangeRecord::New(path) => path,
        }
    }

    /// True for `Modified` and `New` records.
    pub fn is_change(&self) -> bool {
        !matches!(self, ChangeRecord::Unchanged(_))
    }

    /// Short state label for display.
    pub fn state(&self) -> &'static str {
        match self {
            ChangeRecord::Unchanged(_) => "unchanged",
            ChangeRecord::Modified(_) => "modified",
            ChangeRecord::New(_) => "new",
        }
    }
}

/// Compare a fresh snapshot against a loaded baseline.
///
/// Pure function over two in-memory mappings; performs no I/O. Digest
/// comparison is exact string equality. Records come out in the fresh
/// snapshot's sorted path order.
pub fn compare(baseline: &Snapshot, fresh: &Snapshot) -> Vec<ChangeRecord> {
    fresh
        .iter()
        .map(|(path, digest)| match baseline.digest_for(path) {
            None => ChangeRecord::New(path.clone()),
            Some(old) if old != digest => ChangeRecord::Modified(path.clone()),
            Some(_) => ChangeRecord::Unchanged(path.clone()),
        })
        .collect()
}

//! Baseline store: durable persistence for snapshots

use crate::error::EngineError;
use crate::snapshot::Snapshot;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// JSON-file-backed store for the persisted baseline snapshot.
///
/// The document is a plain JSON object mapping relative path to lowercase hex
/// digest. Access goes through an internal mutex so a verify pass sharing the
/// store can never observe a baseline mid-replacement.
pub struct BaselineStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl BaselineStore {
    /// Create a store for the baseline at the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// File path of the persisted baseline.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a snapshot, wholesale replacing any prior baseline.
    ///
    /// The document is written to a temporary sibling and renamed into place,
    /// so a failed write never leaves a partial baseline readable by `load`.
    #[instrument(skip(self, snapshot), fields(path = %self.path.display()))]
    pub fn persist(&self, snapshot: &Snapshot) -> Result<(), EngineError> {
        let _guard = self.lock.lock();

        let json = serde_json::to_string_pretty(snapshot).map_err(|e| EngineError::BaselineIo {
            path: self.path.clone(),
            source: e.into(),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| EngineError::BaselineIo {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut tmp_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "baseline".into());
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);

        fs::write(&tmp, json).map_err(|e| EngineError::BaselineIo {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| EngineError::BaselineIo {
            path: self.path.clone(),
            source: e,
        })?;

        info!(entry_count = snapshot.len(), "Baseline persisted");
        Ok(())
    }

    /// Load the persisted baseline.
    ///
    /// A missing file is the expected first-run condition and fails with
    /// `BaselineNotFound`; a present but unparseable file fails with
    /// `BaselineCorrupt`.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Snapshot, EngineError> {
        let _guard = self.lock.lock();

        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(EngineError::BaselineNotFound(self.path.clone()));
            }
            Err(e) => {
                return Err(EngineError::BaselineIo {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|e| EngineError::BaselineCorrupt {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(entry_count = snapshot.len(), "Baseline loaded");
        Ok(snapshot)
    }
}

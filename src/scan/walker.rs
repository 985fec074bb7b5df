//! Filesystem walker producing relative file identifiers

use crate::error::ScanError;
use crate::scan::path;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// One regular file found during a scan.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Root-relative identifier with `/` separators
    pub rel_path: String,
    /// Absolute path on disk, for reading content
    pub abs_path: PathBuf,
    /// File size in bytes at walk time
    pub size: u64,
}

/// Walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false for determinism)
    pub follow_symlinks: bool,
    /// Directory or file names to skip entirely (empty by default: every
    /// regular file under the root is scanned)
    pub ignore_names: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_names: Vec::new(),
            max_depth: None,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the tree and collect every regular file, sorted by relative key.
    ///
    /// Directories themselves are not yielded. A missing root fails with
    /// `RootNotFound`; an unreadable subdirectory fails with `Io` naming that
    /// subdirectory. There is no best-effort partial result.
    pub fn walk(&self) -> Result<Vec<FileEntry>, ScanError> {
        let root = path::canonicalize_root(&self.root)?;

        let mut entries = Vec::new();

        let walker = WalkDir::new(&root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker {
            let entry = entry.map_err(|e| {
                let at = e
                    .path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| root.clone());
                ScanError::Io {
                    path: at,
                    source: e.into(),
                }
            })?;

            if entry.path() == root {
                continue;
            }

            if self.should_ignore(&entry) {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| ScanError::Io {
                path: entry.path().to_path_buf(),
                source: e.into(),
            })?;

            if metadata.is_file() {
                entries.push(FileEntry {
                    rel_path: path::relative_key(&root, entry.path())?,
                    abs_path: entry.path().to_path_buf(),
                    size: metadata.len(),
                });
            }
            // Directories are descended into but not yielded; symlinks are
            // skipped unless follow_symlinks resolves them to files.
        }

        entries.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));

        // NFC normalization could in principle fold two distinct names onto
        // one key; a scan must never yield the same key twice.
        for pair in entries.windows(2) {
            if pair[0].rel_path == pair[1].rel_path {
                return Err(ScanError::InvalidPath(format!(
                    "duplicate relative path in scan: {}",
                    pair[0].rel_path
                )));
            }
        }

        Ok(entries)
    }

    /// Check if an entry should be skipped based on the ignore list
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if self.config.ignore_names.is_empty() {
            return false;
        }
        for component in entry.path().components() {
            if let std::path::Component::Normal(name) = component {
                let name = name.to_string_lossy();
                if self.config.ignore_names.iter().any(|p| name == p.as_str()) {
                    return true;
                }
            }
        }
        false
    }
}

//! Path canonicalization and relative-key normalization

use crate::error::ScanError;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a scan root, verifying it exists and is a directory.
///
/// Uses dunce so Windows paths come back without the verbatim `\\?\` prefix.
pub fn canonicalize_root(root: &Path) -> Result<PathBuf, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    dunce::canonicalize(root).map_err(|e| ScanError::Io {
        path: root.to_path_buf(),
        source: e,
    })
}

/// Compute the canonical relative key for a file under `root`.
///
/// Keys use `/` as separator on every platform and are Unicode-normalized to
/// NFC, so a baseline captured on one traversal matches a verify pass using a
/// different underlying traversal or filesystem encoding.
pub fn relative_key(root: &Path, path: &Path) -> Result<String, ScanError> {
    let rel = path.strip_prefix(root).map_err(|_| {
        ScanError::InvalidPath(format!(
            "{} is outside scan root {}",
            path.display(),
            root.display()
        ))
    })?;

    let mut parts: Vec<String> = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
            other => {
                return Err(ScanError::InvalidPath(format!(
                    "unexpected component {:?} in relative path {}",
                    other,
                    rel.display()
                )))
            }
        }
    }

    if parts.is_empty() {
        return Err(ScanError::InvalidPath(format!(
            "{} is the scan root itself, not a file under it",
            path.display()
        )));
    }

    Ok(parts.join("/").nfc().collect())
}

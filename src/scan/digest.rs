//! Streaming content digests using BLAKE3

use crate::error::ScanError;
use crate::types::Digest;
use blake3::Hasher;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size for streaming file content into the hasher.
pub const CHUNK_SIZE: usize = 8192;

/// Compute the content digest of a file by streaming its bytes.
///
/// The digest depends on the file's byte content alone; the chunking used to
/// feed the hasher does not affect the result. Memory use is bounded by the
/// chunk buffer, so arbitrarily large files are supported.
pub fn digest_file(path: &Path) -> Result<Digest, ScanError> {
    let mut file = File::open(path).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = Hasher::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|e| ScanError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(*hasher.finalize().as_bytes())
}

/// Compute the digest of an in-memory byte slice.
///
/// Produces the same digest as `digest_file` for equal content.
pub fn digest_bytes(content: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(content);
    *hasher.finalize().as_bytes()
}

/// Lowercase hex rendering of a digest, as stored in the baseline.
pub fn digest_hex(digest: &Digest) -> String {
    hex::encode(digest)
}

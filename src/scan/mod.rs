//! Filesystem scanning
//!
//! Deterministic traversal of a directory tree and streaming content digests
//! for the regular files found there. Walker output is keyed by root-relative
//! paths so two scans of the same tree are comparable regardless of the
//! underlying traversal order.

pub mod digest;
pub mod path;
pub mod walker;

pub use digest::{digest_bytes, digest_file, digest_hex, CHUNK_SIZE};
pub use walker::{FileEntry, Walker, WalkerConfig};

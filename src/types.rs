//! Shared type aliases.

/// 32-byte BLAKE3 content digest
pub type Digest = [u8; 32];

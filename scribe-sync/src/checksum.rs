//! SHA-256 content digests reported alongside each reconciled file.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `content`.
pub fn sha256_hex(content: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(content);
    hex::encode(h.finalize())
}

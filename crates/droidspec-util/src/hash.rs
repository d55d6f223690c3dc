use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Abbreviate a hex digest to its first 12 characters for display.
pub fn short_digest(hex: &str) -> &str {
    &hex[..hex.len().min(12)]
}

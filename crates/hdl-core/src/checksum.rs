//! Short content-derived fingerprints for filename disambiguation.
//!
//! Long URL paths are truncated when turned into filenames; the fingerprint
//! of the complete URL is appended so truncated names stay distinct.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const FINGERPRINT_LEN: usize = 8;

/// Compute SHA-256 of `data` and return the digest as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// First [`FINGERPRINT_LEN`] hex characters of the SHA-256 of the full URL.
pub fn url_fingerprint(url: &str) -> String {
    let mut digest = sha256_hex(url.as_bytes());
    digest.truncate(FINGERPRINT_LEN);
    digest
}

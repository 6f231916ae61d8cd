//! Content fingerprinting for change detection.
//!
//! The screening pipeline records the fingerprint of every processed résumé;
//! a file whose bytes have not changed is skipped on later runs.

use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::errors::AppError;

/// Streaming SHA-256 over the file bytes, as a lowercase hex string.
/// Same content always yields the same fingerprint.
pub fn fingerprint_file(path: &Path) -> Result<String, AppError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Fingerprint of an in-memory byte buffer (uploads that never touch disk).
pub fn fingerprint_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

//! Keystore fingerprinting.
//!
//! A release engineer checks the digest printed here against the one the
//! distribution console shows for the registered upload key.

use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// SHA-256 digest of a file, formatted the way `keytool -list -v` prints
/// certificate fingerprints: uppercase hex pairs joined by colons.
///
/// # Errors
///
/// Returns error if the file cannot be opened or read.
pub fn sha256_file(path: &Path) -> Result<String> {
    let file = std::fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format_digest(hasher.finalize().as_slice()))
}

/// Format digest bytes as colon-separated uppercase hex pairs.
fn format_digest(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}

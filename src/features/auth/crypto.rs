//! Password digest helper. Single-pass SHA-256, no salt, no stretching: the
//! stored digests only obfuscate passwords at rest in localStorage and must
//! not be treated as a password-security mechanism.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of `input`.
pub fn digest_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

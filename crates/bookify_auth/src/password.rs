// --- File: crates/bookify_auth/src/password.rs ---
//! Password hashing.
//!
//! bcrypt with the default adaptive cost: deliberately slow, salted per hash,
//! and with a constant-time digest comparison on verify. A fast or reversible
//! encoding here would be a correctness bug, not a style choice.

use bcrypt::{hash, verify, DEFAULT_COST};
use bookify_common::ApiError;

/// Hashes a plaintext password into an opaque bcrypt digest.
pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    hash(plain, DEFAULT_COST)
        .map_err(|err| ApiError::Internal(format!("password hashing failed: {err}")))
}

/// Verifies a plaintext password against a stored digest.
///
/// A malformed digest counts as a failed verification rather than an error:
/// callers only ever care whether the credentials match.
pub fn verify_password(plain: &str, digest: &str) -> bool {
    verify(plain, digest).unwrap_or(false)
}

//! Authentication Port

use crate::error::Result;

/// Checks a plaintext password against a stored hash
pub trait PasswordVerifier: Send + Sync {
    /// `Ok(true)` on a match, `Ok(false)` on a mismatch, an error when the
    /// hash itself cannot be parsed
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

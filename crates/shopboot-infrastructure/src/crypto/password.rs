//! Password hashing using Argon2

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier as _, SaltString, rand_core::OsRng},
};
use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::PasswordVerifier;

/// Verifies customer passwords against PHC-format Argon2 hashes
#[derive(Clone)]
pub struct Argon2PasswordVerifier {
    argon2: Argon2<'static>,
}

impl Argon2PasswordVerifier {
    /// Verifier with the default Argon2 parameters
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a password, e.g. to seed a customer row
    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::internal(format!("Password hashing failed: {e}")))?;

        Ok(password_hash.to_string())
    }
}

impl Default for Argon2PasswordVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordVerifier for Argon2PasswordVerifier {
    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| Error::Authentication {
            message: format!("Invalid password hash format: {e}"),
            source: None,
        })?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

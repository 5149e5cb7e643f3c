//! Cryptographic services

pub mod password;

pub use password::Argon2PasswordVerifier;

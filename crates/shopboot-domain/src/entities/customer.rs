//! Customer entity

use serde::{Deserialize, Serialize};

/// A shopper account as stored by the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Database identifier
    pub customer_id: i64,
    /// Login e-mail (matched case-insensitively)
    pub email: String,
    /// Argon2 PHC-format password hash
    pub password_hash: String,
    /// Whether the account may log in
    pub status: bool,
}

impl Customer {
    /// Create an enabled customer
    pub fn new(
        customer_id: i64,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            email: email.into(),
            password_hash: password_hash.into(),
            status: true,
        }
    }
}

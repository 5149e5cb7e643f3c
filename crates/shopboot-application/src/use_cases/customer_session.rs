//! Customer login state
//!
//! A logged-in customer is recorded in the session under `customer_id`.

use serde_json::Value;
use shopboot_domain::constants::CUSTOMER_SESSION_KEY;
use shopboot_domain::entities::Customer;
use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::{CatalogDatabase, SessionStore};
use tracing::{debug, info};

pub use shopboot_domain::ports::PasswordVerifier;

/// Logs customers in and out of a session
pub struct CustomerSession<'a> {
    db: &'a dyn CatalogDatabase,
    verifier: &'a dyn PasswordVerifier,
}

impl<'a> CustomerSession<'a> {
    /// Create a session helper over `db`, checking passwords with `verifier`
    pub fn new(db: &'a dyn CatalogDatabase, verifier: &'a dyn PasswordVerifier) -> Self {
        Self { db, verifier }
    }

    /// Log `email` in
    ///
    /// With `override_password` the password is not checked, only the
    /// account's existence and status.
    pub fn login(
        &self,
        session: &mut dyn SessionStore,
        email: &str,
        password: &str,
        override_password: bool,
    ) -> Result<Customer> {
        let customer = self
            .db
            .customer_by_email(email.trim())?
            .filter(|customer| customer.status)
            .ok_or_else(|| Error::authentication("Could not login customer"))?;

        if !override_password && !self.verifier.verify(password, &customer.password_hash)? {
            debug!(customer_id = customer.customer_id, "Password mismatch");
            return Err(Error::authentication("Could not login customer"));
        }

        session.set(CUSTOMER_SESSION_KEY, Value::from(customer.customer_id))?;
        info!(customer_id = customer.customer_id, "Customer logged in");
        Ok(customer)
    }

    /// Log out whoever is logged in; a no-op when nobody is
    pub fn logout(session: &mut dyn SessionStore) -> Result<bool> {
        if !Self::is_logged(session) {
            return Ok(false);
        }
        session.remove(CUSTOMER_SESSION_KEY)?;
        info!("Customer logged out");
        Ok(true)
    }

    /// Identifier of the logged-in customer
    pub fn customer_id(session: &dyn SessionStore) -> Option<i64> {
        session.get(CUSTOMER_SESSION_KEY)?.as_i64()
    }

    /// Whether a customer is logged in
    pub fn is_logged(session: &dyn SessionStore) -> bool {
        Self::customer_id(session).is_some()
    }
}

//! Cookie writes

use crate::constants::COOKIE_PATH;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A cookie the pipeline asks the client to store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Absolute expiry
    pub expires: DateTime<Utc>,
    /// Path scope
    pub path: String,
    /// Domain scope, `None` for the current host only
    pub domain: Option<String>,
}

impl Cookie {
    /// Cookie on path `/` expiring `ttl_secs` seconds from `now`
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        now: DateTime<Utc>,
        ttl_secs: i64,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            expires: now + Duration::seconds(ttl_secs),
            path: COOKIE_PATH.to_string(),
            domain: None,
        }
    }

    /// Scope the cookie to a domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

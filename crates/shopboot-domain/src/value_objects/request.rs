//! Simulated request
//!
//! The harness never serves HTTP; tests describe the request they want the
//! pipeline to see through a [`RequestContext`].

use crate::constants::{
    SERVER_ACCEPT_LANGUAGE, SERVER_HTTP_HOST, SERVER_PHP_SELF, SERVER_REMOTE_ADDR,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Server, cookie and query variables of one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Server variables (`HTTP_HOST`, `PHP_SELF`, ...)
    #[serde(default)]
    pub server: BTreeMap<String, String>,
    /// Cookies sent by the client
    #[serde(default)]
    pub cookie: BTreeMap<String, String>,
    /// Query-string parameters
    #[serde(default)]
    pub get: BTreeMap<String, String>,
}

impl RequestContext {
    /// Request for `host` executing `script_path`
    pub fn new(host: impl Into<String>, script_path: impl Into<String>) -> Self {
        Self::default().with_host(host).with_script(script_path)
    }

    /// Set the `HTTP_HOST` server variable
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.server.insert(SERVER_HTTP_HOST.to_string(), host.into());
        self
    }

    /// Set the `PHP_SELF` server variable
    pub fn with_script(mut self, script_path: impl Into<String>) -> Self {
        self.server
            .insert(SERVER_PHP_SELF.to_string(), script_path.into());
        self
    }

    /// Set the `HTTP_ACCEPT_LANGUAGE` server variable
    pub fn with_accept_language(mut self, header: impl Into<String>) -> Self {
        self.server
            .insert(SERVER_ACCEPT_LANGUAGE.to_string(), header.into());
        self
    }

    /// Set the `REMOTE_ADDR` server variable
    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.set_remote_addr(addr);
        self
    }

    /// Set the `REMOTE_ADDR` server variable in place
    pub fn set_remote_addr(&mut self, addr: impl Into<String>) {
        self.server
            .insert(SERVER_REMOTE_ADDR.to_string(), addr.into());
    }

    /// Add a client cookie
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookie.insert(name.into(), value.into());
        self
    }

    /// Add a query-string parameter
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.get.insert(name.into(), value.into());
        self
    }

    /// Request host, empty when unset
    pub fn host(&self) -> &str {
        self.server_var(SERVER_HTTP_HOST).unwrap_or_default()
    }

    /// Executing script path, empty when unset
    pub fn script_path(&self) -> &str {
        self.server_var(SERVER_PHP_SELF).unwrap_or_default()
    }

    /// Non-empty `Accept-Language` header
    pub fn accept_language(&self) -> Option<&str> {
        self.server_var(SERVER_ACCEPT_LANGUAGE)
            .filter(|header| !header.is_empty())
    }

    /// Client address, if any
    pub fn remote_addr(&self) -> Option<&str> {
        self.server_var(SERVER_REMOTE_ADDR)
    }

    /// Server variable lookup
    pub fn server_var(&self, name: &str) -> Option<&str> {
        self.server.get(name).map(String::as_str)
    }

    /// Client cookie lookup
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookie.get(name).map(String::as_str)
    }

    /// Query parameter lookup
    pub fn query(&self, name: &str) -> Option<&str> {
        self.get.get(name).map(String::as_str)
    }
}

//! Installation configuration root

use crate::config::types::{DatabaseConfig, LoggingConfig, PathsConfig, SessionConfig};
use crate::constants::{DEFAULT_HTTP_SERVER, DEFAULT_HTTPS_SERVER};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the bootstrap needs to know about an installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Storefront base URL, used when no store matches
    pub http_server: String,

    /// Secure storefront base URL, used when no store matches
    pub https_server: String,

    /// Application directories
    pub paths: PathsConfig,

    /// Catalog database
    pub database: DatabaseConfig,

    /// Session storage
    pub session: SessionConfig,

    /// Logging
    pub logging: LoggingConfig,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            http_server: DEFAULT_HTTP_SERVER.to_string(),
            https_server: DEFAULT_HTTPS_SERVER.to_string(),
            paths: PathsConfig::default(),
            database: DatabaseConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl InstallConfig {
    /// Resolve every relative path against `root`
    pub fn resolved(mut self, root: &Path) -> Self {
        self.paths = self.paths.resolved(root);
        self.database.path = root.join(&self.database.path);
        self.session.path = root.join(&self.session.path);
        self
    }
}

//! Session storage configuration

use crate::constants::DEFAULT_SESSION_DIR;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Session backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionDriver {
    /// Session lives as long as the harness
    #[default]
    Memory,
    /// JSON document under [`SessionConfig::path`]
    File,
}

/// Session storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Backend
    pub driver: SessionDriver,

    /// Session directory (file backend)
    pub path: PathBuf,

    /// Session to reopen instead of starting a new one (file backend)
    pub id: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            driver: SessionDriver::default(),
            path: PathBuf::from(DEFAULT_SESSION_DIR),
            id: None,
        }
    }
}

//! Catalog database configuration

use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_TABLE_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Catalog database backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    /// Empty in-memory catalog; tests inject their own rows
    #[default]
    Memory,
    /// SQLite file at [`DatabaseConfig::path`]
    Sqlite,
}

/// Catalog database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Backend
    pub driver: DatabaseDriver,

    /// Database file (SQLite)
    pub path: PathBuf,

    /// Table name prefix
    pub prefix: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: DatabaseDriver::default(),
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
            prefix: DEFAULT_TABLE_PREFIX.to_string(),
        }
    }
}

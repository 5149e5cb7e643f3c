//! Environment tag

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which half of the application is being bootstrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Back-office application
    Admin,
    /// Storefront application
    #[default]
    Catalog,
}

impl Environment {
    /// Tag as written in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Catalog => "catalog",
        }
    }

    /// Directory holding the configuration file for this environment
    ///
    /// `admin` reads from the root itself, `catalog` from `<root>/admin/`.
    pub fn config_dir(&self, root: &Path) -> PathBuf {
        match self {
            Self::Admin => root.to_path_buf(),
            Self::Catalog => root.join("admin"),
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "admin" => Ok(Self::Admin),
            "catalog" => Ok(Self::Catalog),
            other => Err(Error::config(format!(
                "Unknown environment '{other}'. Use admin or catalog"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Route/action naming convention
//!
//! A route such as `catalog/product` maps deterministically to:
//!
//! | Name | Value |
//! |------|-------|
//! | symbol stem | `_catalog_product` |
//! | controller file | `controller/catalog/product.<ext>` |
//! | controller class | `controller_catalog_product` |
//! | model file | `model/catalog/product.<ext>` |
//! | model accessor | `model_catalog_product` |

use crate::constants::{CONTROLLER_DIR, CONTROLLER_PREFIX, MODEL_DIR, MODEL_PREFIX};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A route to a controller or model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    route: String,
}

/// Where an action lives on disk and which class implements it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTarget {
    /// Absolute controller file path
    pub file: PathBuf,
    /// Controller class name
    pub class: String,
}

impl Action {
    /// Parse a route
    ///
    /// Characters outside `[A-Za-z0-9_/]` are dropped and empty segments are
    /// ignored, so `/common//home/` and `common/home` are the same action.
    pub fn parse(route: &str) -> Result<Self> {
        let cleaned: String = route
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '/')
            .collect();
        let route = cleaned
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");

        if route.is_empty() {
            return Err(Error::invalid_argument(format!(
                "Route '{cleaned}' has no segments"
            )));
        }

        Ok(Self { route })
    }

    /// Normalized route
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Route segments in order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.route.split('/')
    }

    /// Every segment prefixed with `_` and concatenated
    pub fn symbol_stem(&self) -> String {
        self.segments().map(|segment| format!("_{segment}")).collect()
    }

    /// Controller class name, e.g. `controller_common_home`
    pub fn class_name(&self) -> String {
        format!("{CONTROLLER_PREFIX}{}", self.symbol_stem())
    }

    /// Registry key under which a loaded model is stored, e.g. `model_catalog_product`
    pub fn model_accessor(&self) -> String {
        format!("{MODEL_PREFIX}{}", self.symbol_stem())
    }

    /// Controller file relative to the application directory
    pub fn controller_file(&self, extension: &str) -> PathBuf {
        Path::new(CONTROLLER_DIR).join(format!("{}.{extension}", self.route))
    }

    /// Model file relative to the application directory
    pub fn model_file(&self, extension: &str) -> PathBuf {
        Path::new(MODEL_DIR).join(format!("{}.{extension}", self.route))
    }

    /// Resolve the controller file and class under an application directory
    pub fn resolve(&self, application_dir: &Path, extension: &str) -> ActionTarget {
        ActionTarget {
            file: application_dir.join(self.controller_file(extension)),
            class: self.class_name(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route)
    }
}

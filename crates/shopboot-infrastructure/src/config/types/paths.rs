//! Application directory configuration

use crate::constants::{
    DEFAULT_APPLICATION_DIR, DEFAULT_CONTROLLER_EXTENSION, DEFAULT_LANGUAGE_DIR,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the application keeps its code and translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding `controller/` and `model/`
    pub application: PathBuf,

    /// Directory holding one subdirectory per language
    pub language: PathBuf,

    /// Extension of controller and model files
    pub controller_extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            application: PathBuf::from(DEFAULT_APPLICATION_DIR),
            language: PathBuf::from(DEFAULT_LANGUAGE_DIR),
            controller_extension: DEFAULT_CONTROLLER_EXTENSION.to_string(),
        }
    }
}

impl PathsConfig {
    /// Join relative directories onto `root`; absolute ones are kept
    pub fn resolved(self, root: &Path) -> Self {
        Self {
            application: root.join(self.application),
            language: root.join(self.language),
            controller_extension: self.controller_extension,
        }
    }
}

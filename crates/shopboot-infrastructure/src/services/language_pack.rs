//! Translation strings
//!
//! A language pack is a flat TOML table of strings stored at
//! `<language dir>/<directory>/<file>.toml`. Later files override keys of
//! earlier ones.

use crate::constants::LANGUAGE_PACK_EXTENSION;
use crate::error_ext::ErrorContext;
use shopboot_domain::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Strings of the resolved language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePack {
    directory: PathBuf,
    strings: BTreeMap<String, String>,
}

impl LanguagePack {
    /// Pack rooted at `<language_dir>/<directory>`, with nothing loaded
    pub fn new(language_dir: &Path, directory: &str) -> Self {
        Self {
            directory: language_dir.join(directory),
            strings: BTreeMap::new(),
        }
    }

    /// Open the pack and load its base file
    pub fn open(language_dir: &Path, directory: &str, filename: &str) -> Result<Self> {
        let mut pack = Self::new(language_dir, directory);
        pack.load(filename)?;
        Ok(pack)
    }

    /// Directory holding the pack's files
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Load `<file>.toml` from the pack directory, returning the number of keys read
    pub fn load(&mut self, file: &str) -> Result<usize> {
        let path = self
            .directory
            .join(format!("{file}.{LANGUAGE_PACK_EXTENSION}"));
        if !path.is_file() {
            return Err(Error::not_found(format!(
                "Language file {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(&path)
            .io_context(format!("Failed to read language file {}", path.display()))?;
        let strings: BTreeMap<String, String> = toml::from_str(&raw)
            .config_context(format!("Invalid language file {}", path.display()))?;

        let count = strings.len();
        self.strings.extend(strings);
        debug!(file = %path.display(), keys = count, "Loaded language file");
        Ok(count)
    }

    /// Translation for `key`, or the key itself when it has none
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map_or(key, String::as_str)
    }

    /// Whether `key` has a translation
    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    /// Number of loaded strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether nothing is loaded
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

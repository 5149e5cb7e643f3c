//! File-backed session store
//!
//! Each session is a JSON document `<dir>/<id>.json`. Every write rewrites
//! the document, so a later harness opening the same id sees the values.

use crate::constants::SESSION_FILE_EXTENSION;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::SessionStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionDocument {
    id: String,
    #[serde(default)]
    data: BTreeMap<String, Value>,
}

/// Session persisted as a JSON file
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    document: SessionDocument,
}

impl FileSessionStore {
    /// Start a new session with a random id under `dir`
    pub fn create(dir: &Path) -> Result<Self> {
        Self::open(dir, &Uuid::new_v4().to_string())
    }

    /// Open session `id` under `dir`, loading its values if the file exists
    pub fn open(dir: &Path, id: &str) -> Result<Self> {
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::invalid_argument(format!(
                "Session id '{id}' is not a valid file name"
            )));
        }

        fs::create_dir_all(dir).map_err(|e| {
            Error::io_with_source(
                format!("Failed to create session directory {}", dir.display()),
                e,
            )
        })?;

        let path = dir.join(format!("{id}.{SESSION_FILE_EXTENSION}"));
        let document = if path.is_file() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                Error::io_with_source(format!("Failed to read session {}", path.display()), e)
            })?;
            serde_json::from_str(&raw)?
        } else {
            SessionDocument {
                id: id.to_string(),
                data: BTreeMap::new(),
            }
        };

        debug!(session_id = id, path = %path.display(), "Opened file session");
        Ok(Self { path, document })
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.document)?;
        fs::write(&self.path, raw).map_err(|e| {
            Error::io_with_source(
                format!("Failed to write session {}", self.path.display()),
                e,
            )
        })
    }
}

impl SessionStore for FileSessionStore {
    fn id(&self) -> &str {
        &self.document.id
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.document.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.document.data.insert(key.to_string(), value);
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        let previous = self.document.data.remove(key);
        if previous.is_some() {
            self.persist()?;
        }
        Ok(previous)
    }
}

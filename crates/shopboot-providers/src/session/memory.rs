//! In-memory session store

use serde_json::Value;
use shopboot_domain::error::Result;
use shopboot_domain::ports::SessionStore;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Session held in memory by one harness instance
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    id: String,
    data: BTreeMap<String, Value>,
}

impl InMemorySessionStore {
    /// Empty session with a random id
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Empty session with a fixed id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: BTreeMap::new(),
        }
    }

    /// Stored keys and values
    pub fn data(&self) -> &BTreeMap<String, Value> {
        &self.data
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for InMemorySessionStore {
    fn id(&self) -> &str {
        &self.id
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.remove(key))
    }
}

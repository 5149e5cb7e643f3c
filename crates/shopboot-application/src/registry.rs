//! Service Registry
//!
//! String-keyed storage for services that have no typed slot on the
//! bootstrap context: models loaded by route (`model_catalog_product`) and
//! anything a test wants to stash. Entries are type-erased and recovered with
//! a typed [`ServiceRegistry::get`].

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Mapping from unique string keys to shared service instances
#[derive(Default)]
pub struct ServiceRegistry {
    entries: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a service under `key`, replacing any previous entry
    pub fn set<T: Any + Send + Sync>(&mut self, key: impl Into<String>, service: T) {
        self.entries.insert(key.into(), Arc::new(service));
    }

    /// Store an already shared, type-erased service under `key`
    pub fn set_shared(&mut self, key: impl Into<String>, service: Arc<dyn Any + Send + Sync>) {
        self.entries.insert(key.into(), service);
    }

    /// Service stored under `key`, if present and of type `T`
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.entries.get(key)?.clone().downcast::<T>().ok()
    }

    /// Type-erased service stored under `key`
    pub fn get_shared(&self, key: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        self.entries.get(key).cloned()
    }

    /// Whether `key` is registered
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

//! Session Port

use crate::error::Result;
use serde_json::Value;

/// Per-client session state
///
/// Implementations may persist state outside the process; tests must treat
/// it as externally durable.
pub trait SessionStore {
    /// Session identifier
    fn id(&self) -> &str;

    /// Value stored under `key`
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove `key`, returning its previous value
    fn remove(&mut self, key: &str) -> Result<Option<Value>>;

    /// String value stored under `key`
    fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

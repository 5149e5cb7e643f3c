//! Setting entity

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A configuration value scoped to the global store (`0`) or a specific store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    /// Owning store (`0` for global settings)
    pub store_id: i64,
    /// Setting key, e.g. `config_language`
    pub key: String,
    /// Raw stored value
    pub value: String,
    /// Whether `value` holds an encoded structure that must be decoded
    pub serialized: bool,
}

impl Setting {
    /// Plain (not serialized) setting
    pub fn plain(store_id: i64, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            store_id,
            key: key.into(),
            value: value.into(),
            serialized: false,
        }
    }

    /// Serialized setting holding the JSON encoding of `value`
    pub fn serialized(store_id: i64, key: impl Into<String>, value: &Value) -> Self {
        Self {
            store_id,
            key: key.into(),
            value: value.to_string(),
            serialized: true,
        }
    }

    /// Value as it should appear in the merged configuration
    ///
    /// Serialized values are decoded from JSON; plain values are kept as strings.
    pub fn decoded_value(&self) -> Result<Value> {
        if self.serialized {
            serde_json::from_str(&self.value).map_err(|e| Error::setting_decode(&self.key, e))
        } else {
            Ok(Value::String(self.value.clone()))
        }
    }
}

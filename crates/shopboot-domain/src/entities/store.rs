//! Store entity and URL normalization
//!
//! A store is matched by comparing its normalized URL against a candidate
//! URL built from the current request. Both sides go through [`strip_www`],
//! so a host reached with or without `www.` resolves to the same store.

use crate::constants::{STORE_URL_SCHEME, WWW_PREFIX};
use serde::{Deserialize, Serialize};

/// A storefront reachable under a base URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Store identifier (`0` is reserved for the default store)
    pub id: i64,
    /// Configured base URL, e.g. `http://www.shop.test/`
    pub url: String,
}

impl Store {
    /// Create a new store record
    pub fn new(id: i64, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
        }
    }

    /// Configured URL with every `www.` removed
    pub fn normalized_url(&self) -> String {
        strip_www(&self.url)
    }

    /// Whether this store answers the given normalized candidate URL
    pub fn matches(&self, candidate: &str) -> bool {
        self.normalized_url() == candidate
    }
}

/// Remove every `www.` occurrence
pub fn strip_www(value: &str) -> String {
    value.replace(WWW_PREFIX, "")
}

/// Directory portion of a script path with trailing `/`, `.` and `\` trimmed
///
/// `/index.php` and `index.php` yield an empty string, `/shop/index.php`
/// yields `/shop`.
pub fn script_directory(script_path: &str) -> &str {
    let trimmed = if script_path.len() > 1 {
        script_path.trim_end_matches('/')
    } else {
        script_path
    };

    let directory = match trimmed.rfind('/') {
        Some(0) => "/",
        Some(index) => &trimmed[..index],
        None if trimmed.is_empty() => "",
        None => ".",
    };

    directory.trim_end_matches(['/', '.', '\\'])
}

/// Build the normalized URL a store must match for this request
///
/// `http://` + host without `www.` + script directory + `/`.
pub fn candidate_store_url(host: &str, script_path: &str) -> String {
    format!(
        "{}{}{}/",
        STORE_URL_SCHEME,
        strip_www(host),
        script_directory(script_path)
    )
}

//! Language entity

use serde::{Deserialize, Serialize};

/// An installable language
///
/// Only languages with `status = true` take part in locale resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Database identifier
    pub language_id: i64,
    /// Human readable name
    pub name: String,
    /// Language code, e.g. `en`
    pub code: String,
    /// Browser locale tags this language answers, in stored order
    pub locale: Vec<String>,
    /// Directory holding the language's translation files
    pub directory: String,
    /// Base translation file loaded after resolution
    pub filename: String,
    /// Whether the language is enabled
    pub status: bool,
}

impl Language {
    /// Create an enabled language whose directory and filename equal its name
    pub fn new(language_id: i64, code: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            language_id,
            code: code.into(),
            locale: Vec::new(),
            directory: name.to_lowercase(),
            filename: name.to_lowercase(),
            name,
            status: true,
        }
    }

    /// Set the locale tags from their stored comma-separated form
    pub fn with_locales(mut self, raw: &str) -> Self {
        self.locale = parse_locales(raw);
        self
    }

    /// Set the translation directory and base file name
    pub fn with_files(mut self, directory: impl Into<String>, filename: impl Into<String>) -> Self {
        self.directory = directory.into();
        self.filename = filename.into();
        self
    }

    /// Set the enabled flag
    pub fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    /// Whether a browser tag is one of this language's locale tags (exact match)
    pub fn accepts(&self, tag: &str) -> bool {
        self.locale.iter().any(|locale| locale == tag)
    }

    /// Locale tags in their stored comma-separated form
    pub fn locale_list(&self) -> String {
        self.locale.join(",")
    }
}

/// Split a stored comma-separated locale list
pub fn parse_locales(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

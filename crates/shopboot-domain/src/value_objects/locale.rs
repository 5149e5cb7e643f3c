//! Locale decision

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which source of the precedence chain produced the language code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleSource {
    /// Code stored in the session
    Session,
    /// Code stored in the client cookie
    Cookie,
    /// Code negotiated from `Accept-Language`
    Browser,
    /// Configured default language
    Default,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Session => "session",
            Self::Cookie => "cookie",
            Self::Browser => "browser",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

/// The resolved language and where its translations live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleInfo {
    /// Language code
    pub code: String,
    /// Language database id
    pub language_id: i64,
    /// Translation directory
    pub directory: String,
    /// Base translation file
    pub filename: String,
    /// Where the code came from
    pub source: LocaleSource,
}

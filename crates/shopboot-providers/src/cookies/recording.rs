//! Recording cookie jar
//!
//! Keeps every cookie the pipeline issues so tests can assert on them.

use shopboot_domain::error::Result;
use shopboot_domain::ports::CookieJar;
use shopboot_domain::value_objects::Cookie;

/// Cookie jar that records writes in issue order
#[derive(Debug, Clone, Default)]
pub struct RecordingCookieJar {
    issued: Vec<Cookie>,
}

impl RecordingCookieJar {
    /// Empty jar
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cookie issued, oldest first
    pub fn issued(&self) -> &[Cookie] {
        &self.issued
    }

    /// Most recent cookie named `name`
    pub fn last(&self, name: &str) -> Option<&Cookie> {
        self.issued.iter().rev().find(|cookie| cookie.name == name)
    }

    /// Forget every recorded cookie
    pub fn clear(&mut self) {
        self.issued.clear();
    }
}

impl CookieJar for RecordingCookieJar {
    fn set_cookie(&mut self, cookie: Cookie) -> Result<()> {
        self.issued.push(cookie);
        Ok(())
    }
}

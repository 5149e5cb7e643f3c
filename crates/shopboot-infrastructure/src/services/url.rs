//! Storefront link builder

use crate::constants::{URL_ENTRY_SCRIPT, URL_ROUTE_PARAM};
use serde::Serialize;
use shopboot_domain::constants::{SETTING_SECURE, SETTING_SSL, SETTING_URL};
use shopboot_domain::value_objects::Settings;

/// Builds links from the merged base URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Url {
    base: String,
    secure_base: String,
}

impl Url {
    /// Link builder over explicit base URLs
    pub fn new(base: impl Into<String>, secure_base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            secure_base: secure_base.into(),
        }
    }

    /// Link builder over `config_url`, using `config_ssl` for secure links
    /// only when `config_secure` is set
    pub fn from_settings(settings: &Settings) -> Self {
        let base = settings.get_str(SETTING_URL).unwrap_or_default();
        let secure_base = if settings.is_truthy(SETTING_SECURE) {
            settings.get_str(SETTING_SSL).unwrap_or_default()
        } else {
            base.clone()
        };
        Self { base, secure_base }
    }

    /// Plain base URL
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Secure base URL
    pub fn secure_base(&self) -> &str {
        &self.secure_base
    }

    /// Link to `route` with optional `a=1&b=2` style arguments
    ///
    /// Ampersands are escaped as `&amp;` for use in markup.
    pub fn link(&self, route: &str, args: &str, secure: bool) -> String {
        let base = if secure { &self.secure_base } else { &self.base };
        let mut link = format!("{base}{URL_ENTRY_SCRIPT}?{URL_ROUTE_PARAM}={route}");
        let args = args.trim_start_matches('&');
        if !args.is_empty() {
            link.push_str("&amp;");
            link.push_str(&args.replace('&', "&amp;"));
        }
        link
    }
}

//! Fake ports shared by the use case tests

use serde_json::Value;
use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::{CatalogDatabase, CookieJar, PasswordVerifier, SessionStore};
use shopboot_domain::{Cookie, Customer, Language, Setting, Store};
use std::cell::Cell;
use std::collections::BTreeMap;

#[derive(Default)]
pub struct FakeDb {
    pub stores: Vec<Store>,
    pub settings: Vec<Setting>,
    pub languages: Vec<Language>,
    pub customers: Vec<Customer>,
    pub store_lookups: Cell<usize>,
}

impl FakeDb {
    pub fn with_languages(languages: Vec<Language>) -> Self {
        Self {
            languages,
            ..Self::default()
        }
    }
}

impl CatalogDatabase for FakeDb {
    fn find_store_by_url(&self, normalized_url: &str) -> Result<Option<Store>> {
        self.store_lookups.set(self.store_lookups.get() + 1);
        Ok(self
            .stores
            .iter()
            .filter(|store| store.matches(normalized_url))
            .min_by_key(|store| store.id)
            .cloned())
    }

    fn settings_for_store(&self, store_id: i64) -> Result<Vec<Setting>> {
        Ok(self
            .settings
            .iter()
            .filter(|row| row.store_id == 0 || row.store_id == store_id)
            .cloned()
            .collect())
    }

    fn active_languages(&self) -> Result<Vec<Language>> {
        Ok(self.languages.iter().filter(|l| l.status).cloned().collect())
    }

    fn customer_by_email(&self, email: &str) -> Result<Option<Customer>> {
        Ok(self
            .customers
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn provider_name(&self) -> &str {
        "fake"
    }
}

#[derive(Default)]
pub struct MapSession {
    pub data: BTreeMap<String, Value>,
    pub writes: usize,
}

impl SessionStore for MapSession {
    fn id(&self) -> &str {
        "test-session"
    }

    fn get(&self, key: &str) -> Option<Value> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.writes += 1;
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.remove(key))
    }
}

#[derive(Default)]
pub struct VecJar {
    pub cookies: Vec<Cookie>,
}

impl CookieJar for VecJar {
    fn set_cookie(&mut self, cookie: Cookie) -> Result<()> {
        self.cookies.push(cookie);
        Ok(())
    }
}

/// Accepts a password when the stored hash is `plain:<password>`
pub struct PlainVerifier;

impl PasswordVerifier for PlainVerifier {
    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        hash.strip_prefix("plain:")
            .map(|expected| expected == password)
            .ok_or_else(|| Error::authentication("Unsupported hash"))
    }
}

pub fn english_and_german() -> Vec<Language> {
    vec![
        Language::new(1, "en-gb", "English").with_locales("en-GB,en"),
        Language::new(2, "de-de", "Deutsch").with_locales("de-DE,de"),
    ]
}

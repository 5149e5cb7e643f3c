//! In-memory catalog database
//!
//! Answers the catalog queries from rows seeded by the test. Data is not
//! persisted.

use crate::constants::DATABASE_PROVIDER_MEMORY;
use shopboot_domain::entities::{Customer, Language, Setting, Store};
use shopboot_domain::error::Result;
use shopboot_domain::ports::CatalogDatabase;

/// In-memory catalog database
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogDatabase {
    stores: Vec<Store>,
    settings: Vec<Setting>,
    languages: Vec<Language>,
    customers: Vec<Customer>,
}

impl InMemoryCatalogDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a store row
    pub fn with_store(mut self, store: Store) -> Self {
        self.stores.push(store);
        self
    }

    /// Add a setting row
    pub fn with_setting(mut self, setting: Setting) -> Self {
        self.settings.push(setting);
        self
    }

    /// Add several setting rows
    pub fn with_settings(mut self, settings: impl IntoIterator<Item = Setting>) -> Self {
        self.settings.extend(settings);
        self
    }

    /// Add a language row
    pub fn with_language(mut self, language: Language) -> Self {
        self.languages.push(language);
        self
    }

    /// Add a customer row
    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customers.push(customer);
        self
    }
}

impl CatalogDatabase for InMemoryCatalogDatabase {
    fn find_store_by_url(&self, normalized_url: &str) -> Result<Option<Store>> {
        Ok(self
            .stores
            .iter()
            .filter(|store| store.matches(normalized_url))
            .min_by_key(|store| store.id)
            .cloned())
    }

    fn settings_for_store(&self, store_id: i64) -> Result<Vec<Setting>> {
        let mut rows: Vec<Setting> = self
            .settings
            .iter()
            .filter(|row| row.store_id == 0 || row.store_id == store_id)
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.store_id);
        Ok(rows)
    }

    fn active_languages(&self) -> Result<Vec<Language>> {
        Ok(self
            .languages
            .iter()
            .filter(|language| language.status)
            .cloned()
            .collect())
    }

    fn customer_by_email(&self, email: &str) -> Result<Option<Customer>> {
        Ok(self
            .customers
            .iter()
            .find(|customer| customer.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn provider_name(&self) -> &str {
        DATABASE_PROVIDER_MEMORY
    }
}

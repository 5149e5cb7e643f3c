//! Catalog Database Port
//!
//! The four semantic queries the bootstrap needs. Implementations must bind
//! every caller-supplied value as a query parameter.

use crate::entities::{Customer, Language, Setting, Store};
use crate::error::Result;

/// Read access to the application's persisted catalog
pub trait CatalogDatabase {
    /// First store (lowest id) whose URL, with every `www.` removed, equals `normalized_url`
    fn find_store_by_url(&self, normalized_url: &str) -> Result<Option<Store>>;

    /// Settings with `store_id = 0` or `store_id = store_id`, ordered by `store_id` ascending
    fn settings_for_store(&self, store_id: i64) -> Result<Vec<Setting>>;

    /// Languages with `status = true`, in stored order
    fn active_languages(&self) -> Result<Vec<Language>>;

    /// Customer whose e-mail matches case-insensitively
    fn customer_by_email(&self, email: &str) -> Result<Option<Customer>>;

    /// Name of the provider implementation
    fn provider_name(&self) -> &str;
}

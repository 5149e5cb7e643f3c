//! Settings merging
//!
//! Global settings (`store_id = 0`) are applied first and store-specific
//! settings last, so a key present in both ends up with the store's value.

use shopboot_domain::entities::Setting;
use shopboot_domain::error::Result;
use shopboot_domain::ports::CatalogDatabase;
use shopboot_domain::value_objects::Settings;
use tracing::debug;

/// Loads and merges settings for a resolved store
pub struct SettingsMerger<'a> {
    db: &'a dyn CatalogDatabase,
}

impl<'a> SettingsMerger<'a> {
    /// Create a merger over a catalog database
    pub fn new(db: &'a dyn CatalogDatabase) -> Self {
        Self { db }
    }

    /// Merge the global and `store_id` settings into `settings`
    ///
    /// Returns the number of rows applied. An empty result leaves `settings`
    /// untouched.
    pub fn merge(&self, store_id: i64, settings: &mut Settings) -> Result<usize> {
        let rows = self.db.settings_for_store(store_id)?;
        let applied = apply_settings(rows, settings)?;
        debug!(store_id, applied, "Merged settings");
        Ok(applied)
    }
}

/// Apply setting rows in ascending `store_id` order
///
/// The sort is stable, so rows of the same store keep their relative order
/// and the later one wins for a duplicated key.
pub fn apply_settings(mut rows: Vec<Setting>, settings: &mut Settings) -> Result<usize> {
    rows.sort_by_key(|row| row.store_id);
    for row in &rows {
        settings.set(row.key.clone(), row.decoded_value()?);
    }
    Ok(rows.len())
}

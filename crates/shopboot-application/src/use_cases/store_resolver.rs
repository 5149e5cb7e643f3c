//! Store resolution
//!
//! Matches the simulated request against the configured store URLs.

use shopboot_domain::constants::DEFAULT_STORE_ID;
use shopboot_domain::entities::{Store, candidate_store_url};
use shopboot_domain::error::Result;
use shopboot_domain::ports::CatalogDatabase;
use shopboot_domain::value_objects::RequestContext;
use tracing::debug;

/// Outcome of store resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreResolution {
    /// Store id used to scope settings
    pub store_id: i64,
    /// Normalized URL that was looked up
    pub candidate_url: String,
    /// Matched store, `None` when the default store was assumed
    pub store: Option<Store>,
}

impl StoreResolution {
    /// Whether no configured store matched
    pub fn is_default(&self) -> bool {
        self.store.is_none()
    }
}

/// Resolves the current store from the request host and script path
pub struct StoreResolver<'a> {
    db: &'a dyn CatalogDatabase,
}

impl<'a> StoreResolver<'a> {
    /// Create a resolver over a catalog database
    pub fn new(db: &'a dyn CatalogDatabase) -> Self {
        Self { db }
    }

    /// Resolve the store for `request`
    ///
    /// No match yields the default store id `0`.
    pub fn resolve(&self, request: &RequestContext) -> Result<StoreResolution> {
        let candidate_url = candidate_store_url(request.host(), request.script_path());
        let store = self.db.find_store_by_url(&candidate_url)?;
        let store_id = store.as_ref().map_or(DEFAULT_STORE_ID, |s| s.id);

        debug!(
            candidate_url = %candidate_url,
            store_id,
            matched = store.is_some(),
            "Resolved store"
        );

        Ok(StoreResolution {
            store_id,
            candidate_url,
            store,
        })
    }
}

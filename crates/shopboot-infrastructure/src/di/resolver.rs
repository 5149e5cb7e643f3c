//! Provider resolution
//!
//! ```text
//! Config: "database.driver = sqlite"
//!                    │
//!                    ▼
//!        resolve_database(&config)
//!                    │
//!                    ▼
//!        Box<dyn CatalogDatabase>
//! ```

use crate::config::{DatabaseConfig, DatabaseDriver, SessionConfig, SessionDriver};
use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::{CatalogDatabase, SessionStore};
use shopboot_providers::{
    FileSessionStore, InMemoryCatalogDatabase, InMemorySessionStore, SqliteCatalogDatabase,
};
use tracing::debug;

/// Build the catalog database named by `config`
///
/// A SQLite database must already exist; an absent file means the
/// application is not installed.
pub fn resolve_database(config: &DatabaseConfig) -> Result<Box<dyn CatalogDatabase>> {
    let db: Box<dyn CatalogDatabase> = match config.driver {
        DatabaseDriver::Memory => Box::new(InMemoryCatalogDatabase::new()),
        DatabaseDriver::Sqlite => {
            if !config.path.is_file() {
                return Err(Error::setup(format!(
                    "Catalog database {} does not exist",
                    config.path.display()
                )));
            }
            Box::new(SqliteCatalogDatabase::open(&config.path, &config.prefix)?)
        }
    };
    debug!(provider = db.provider_name(), "Resolved catalog database");
    Ok(db)
}

/// Build the session store named by `config`
pub fn resolve_session(config: &SessionConfig) -> Result<Box<dyn SessionStore>> {
    let session: Box<dyn SessionStore> = match (config.driver, config.id.as_deref()) {
        (SessionDriver::Memory, Some(id)) => Box::new(InMemorySessionStore::with_id(id)),
        (SessionDriver::Memory, None) => Box::new(InMemorySessionStore::new()),
        (SessionDriver::File, Some(id)) => Box::new(FileSessionStore::open(&config.path, id)?),
        (SessionDriver::File, None) => Box::new(FileSessionStore::create(&config.path)?),
    };
    debug!(session_id = session.id(), "Resolved session store");
    Ok(session)
}

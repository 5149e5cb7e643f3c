//! # shopboot - Provider Implementations
//!
//! Implementations of the ports defined in `shopboot-domain`.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Catalog database | `CatalogDatabase` | InMemory, Sqlite |
//! | Session | `SessionStore` | InMemory, File |
//! | Cookies | `CookieJar` | Recording |
//!
//! ## Usage
//!
//! ```ignore
//! use shopboot_providers::database::SqliteCatalogDatabase;
//! use shopboot_providers::session::FileSessionStore;
//! ```

pub use shopboot_domain::error::{Error, Result};
pub use shopboot_domain::ports::{CatalogDatabase, CookieJar, SessionStore};

/// Provider-specific constants
pub mod constants;

/// Catalog database implementations
pub mod database;

/// Session store implementations
pub mod session;

/// Cookie jar implementations
pub mod cookies;

pub use cookies::RecordingCookieJar;
pub use database::{InMemoryCatalogDatabase, SqliteCatalogDatabase};
pub use session::{FileSessionStore, InMemorySessionStore};

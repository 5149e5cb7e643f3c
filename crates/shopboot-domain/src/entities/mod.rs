//! Domain Entities
//!
//! Persisted records the bootstrap pipeline reads. Each entity has an
//! identity and is loaded through the [`CatalogDatabase`](crate::ports::CatalogDatabase) port.
//!
//! | Entity | Identity | Description |
//! |--------|----------|-------------|
//! | [`Store`] | `id` | A storefront reachable under a base URL |
//! | [`Setting`] | `(store_id, key)` | A configuration value, global or store-scoped |
//! | [`Language`] | `code` | An installable language with its locale tags |
//! | [`Customer`] | `id` | A shopper account used by the login helper |

/// Customer accounts
pub mod customer;
/// Installable languages
pub mod language;
/// Global and store-scoped settings
pub mod setting;
/// Storefronts and URL normalization
pub mod store;

pub use customer::Customer;
pub use language::{Language, parse_locales};
pub use setting::Setting;
pub use store::{Store, candidate_store_url, script_directory, strip_www};

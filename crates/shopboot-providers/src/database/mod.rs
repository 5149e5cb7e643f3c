//! Catalog Database Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | InMemoryCatalogDatabase | Testing | Rows held in vectors, seeded by the test |
//! | SqliteCatalogDatabase | Local | Application tables in a SQLite file |

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryCatalogDatabase;
pub use sqlite::{SqliteCatalogDatabase, validate_table_prefix};

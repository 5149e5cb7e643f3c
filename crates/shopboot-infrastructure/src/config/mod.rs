//! Installation configuration
//!
//! The install root holds a `config.toml` describing where the application
//! lives, how to reach its database and its base URLs.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_install_config};
pub use types::*;

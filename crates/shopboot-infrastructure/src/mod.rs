//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns and the composition root of the harness.
//!
//! ## Module Categories
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | `config.toml` loading with Figment |
//! | [`di`] | Provider resolution and the bootstrap harness |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Services
//! | Module | Description |
//! |--------|-------------|
//! | [`services`] | Url, language pack, front controller |
//! | [`crypto`] | Argon2 password verification |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`utils`] | Timing helpers |

pub mod config;
pub mod constants;
pub mod crypto;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::{ConfigBuilder, ConfigLoader, InstallConfig};
pub use di::{Harness, HarnessBuilder};
pub use error_ext::ErrorContext;
pub use utils::TimedOperation;

//! # shopboot
//!
//! Bootstraps a storefront application the way its front controller would,
//! without serving HTTP, so tests can call controllers and models directly.
//!
//! ## Example
//!
//! ```ignore
//! use shopboot::{HarnessBuilder, RequestContext};
//!
//! let mut harness = HarnessBuilder::new("/srv/shop")
//!     .with_request(RequestContext::new("shop.test", "/index.php"))
//!     .with_controller("common/home", |_| Box::new(Home::default()))?
//!     .bootstrap()?;
//!
//! assert_eq!(harness.store_id(), 0);
//! harness.dispatch_action("")?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, ports and the error taxonomy
//! - `application` - Store, settings, locale and route resolution
//! - `providers` - In-memory and SQLite catalog databases, session stores
//! - `infrastructure` - Configuration, logging and the bootstrap harness

/// Domain layer - entities, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use shopboot_domain::*;
}

/// Application layer - resolution use cases
pub mod application {
    pub use shopboot_application::*;
}

/// Provider implementations
pub mod providers {
    pub use shopboot_providers::*;
}

/// Infrastructure layer - config, logging and the harness
pub mod infrastructure {
    pub use shopboot_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the harness entry points
pub use infrastructure::{ConfigLoader, Harness, HarnessBuilder, InstallConfig};

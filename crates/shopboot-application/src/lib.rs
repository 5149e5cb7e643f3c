//! Application Layer - shopboot
//!
//! The initialization/resolution pipeline that runs before any test body:
//!
//! ```text
//! RequestContext ──► StoreResolver ──► SettingsMerger ──► LocaleResolver
//!                        │                  │                  │
//!                   store id          merged Settings      LocaleInfo
//! ```
//!
//! plus the per-test helpers that turn routes into controllers and models.
//!
//! ## Dependencies
//!
//! This crate depends only on `shopboot-domain`; every collaborator is reached
//! through a domain port passed in by reference.

pub mod registry;
pub mod use_cases;

pub use registry::ServiceRegistry;
pub use use_cases::*;

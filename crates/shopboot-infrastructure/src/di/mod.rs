//! Composition root
//!
//! [`resolver`] turns configuration into provider instances;
//! [`bootstrap`] runs the initialization pipeline and owns its results.

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{Harness, HarnessBuilder};
pub use resolver::{resolve_database, resolve_session};

//! # shopboot Domain Layer
//!
//! Types and port traits for bootstrapping a storefront application outside
//! its HTTP entry point.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Stores, settings, languages and customers as persisted |
//! | [`value_objects`] | Environment, actions, settings, request, cookies, locale, response |
//! | [`ports`] | Database, session, cookie, controller and front-controller contracts |
//! | [`error`] | The fail-fast error taxonomy |
//! | [`constants`] | Setting keys, cookie names and well-known routes |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use constants::*;
pub use entities::*;
pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;

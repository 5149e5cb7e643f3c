//! Domain Port Interfaces
//!
//! Contracts for the application's collaborators that the bootstrap pipeline
//! only talks to through an interface: the database, the session, the client
//! cookie store, controllers and the front controller.
//!
//! ## Organization
//!
//! - **database** - Parameterized semantic queries over stores, settings, languages, customers
//! - **session** - Durable per-client key/value state
//! - **cookies** - Cookie write primitive
//! - **controller** - Controllers, model factories and the front controller
//! - **auth** - Password hash verification

/// Password verification port
pub mod auth;
/// Controller, model and front-controller ports
pub mod controller;
/// Cookie write port
pub mod cookies;
/// Catalog database port
pub mod database;
/// Session port
pub mod session;

pub use auth::PasswordVerifier;
pub use controller::{
    Controller, ControllerFactory, ControllerScope, FrontController, ModelFactory, ModelInstance,
};
pub use cookies::CookieJar;
pub use database::CatalogDatabase;
pub use session::SessionStore;

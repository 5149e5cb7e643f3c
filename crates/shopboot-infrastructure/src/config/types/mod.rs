//! Configuration types module

pub mod database;
pub mod install;
pub mod logging;
pub mod paths;
pub mod session;

// Re-export main types
pub use database::{DatabaseConfig, DatabaseDriver};
pub use install::InstallConfig;
pub use logging::LoggingConfig;
pub use paths::PathsConfig;
pub use session::{SessionConfig, SessionDriver};

//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `shopboot_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Installation configuration file name
pub const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SHOPBOOT";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default storefront base URL
pub const DEFAULT_HTTP_SERVER: &str = "http://localhost/";

/// Default secure storefront base URL
pub const DEFAULT_HTTPS_SERVER: &str = "http://localhost/";

// ============================================================================
// PATH CONSTANTS
// ============================================================================

/// Default application directory (relative to the install root)
pub const DEFAULT_APPLICATION_DIR: &str = "catalog";

/// Default language directory (relative to the install root)
pub const DEFAULT_LANGUAGE_DIR: &str = "catalog/language";

/// Default session directory (relative to the install root)
pub const DEFAULT_SESSION_DIR: &str = "system/storage/session";

/// Default extension of controller and model files
pub const DEFAULT_CONTROLLER_EXTENSION: &str = "php";

/// Extension of language pack files
pub const LANGUAGE_PACK_EXTENSION: &str = "toml";

// ============================================================================
// DATABASE CONSTANTS
// ============================================================================

/// Default SQLite database file (relative to the install root)
pub const DEFAULT_DATABASE_PATH: &str = "catalog.sqlite";

/// Default table prefix
pub const DEFAULT_TABLE_PREFIX: &str = "oc_";

// ============================================================================
// URL CONSTANTS
// ============================================================================

/// Front controller script linked by the URL service
pub const URL_ENTRY_SCRIPT: &str = "index.php";

/// Query parameter naming the route
pub const URL_ROUTE_PARAM: &str = "route";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "SHOPBOOT_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Default log file stem when file output has none
pub const DEFAULT_LOG_FILE_STEM: &str = "shopboot";

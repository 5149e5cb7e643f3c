//! Domain layer constants
//!
//! Names and defaults that are part of the storefront's conventions: setting
//! keys, cookie names and lifetimes, and the well-known routes.
//! Infrastructure-specific constants live in `shopboot_infrastructure::constants`.

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Identifier of the synthetic default store (also the scope of global settings)
pub const DEFAULT_STORE_ID: i64 = 0;

/// Prefix stripped from hosts and store URLs before matching
pub const WWW_PREFIX: &str = "www.";

/// Scheme used to build the candidate store URL (the harness assumes plain HTTP)
pub const STORE_URL_SCHEME: &str = "http://";

// ============================================================================
// SETTING KEYS
// ============================================================================

/// Resolved store id
pub const SETTING_STORE_ID: &str = "config_store_id";

/// Base storefront URL
pub const SETTING_URL: &str = "config_url";

/// Secure storefront URL
pub const SETTING_SSL: &str = "config_ssl";

/// Whether secure links use `config_ssl`
pub const SETTING_SECURE: &str = "config_secure";

/// Active (and configured default) language code
pub const SETTING_LANGUAGE: &str = "config_language";

/// Active language id
pub const SETTING_LANGUAGE_ID: &str = "config_language_id";

/// Response compression level
pub const SETTING_COMPRESSION: &str = "config_compression";

// ============================================================================
// SESSION / COOKIE CONSTANTS
// ============================================================================

/// Session key and cookie name holding the language code
pub const LANGUAGE_KEY: &str = "language";

/// Language cookie lifetime in seconds (30 days)
pub const LANGUAGE_COOKIE_TTL_SECS: i64 = 60 * 60 * 24 * 30;

/// GET parameter and cookie name used for affiliate tracking
pub const TRACKING_KEY: &str = "tracking";

/// Tracking cookie lifetime in seconds (1000 days)
pub const TRACKING_COOKIE_TTL_SECS: i64 = 3600 * 24 * 1000;

/// Path every harness cookie is scoped to
pub const COOKIE_PATH: &str = "/";

/// Session key holding the logged-in customer id
pub const CUSTOMER_SESSION_KEY: &str = "customer_id";

// ============================================================================
// REQUEST CONSTANTS
// ============================================================================

/// Server variable carrying the request host
pub const SERVER_HTTP_HOST: &str = "HTTP_HOST";

/// Server variable carrying the executing script path
pub const SERVER_PHP_SELF: &str = "PHP_SELF";

/// Server variable carrying the browser's language preferences
pub const SERVER_ACCEPT_LANGUAGE: &str = "HTTP_ACCEPT_LANGUAGE";

/// Server variable carrying the client address
pub const SERVER_REMOTE_ADDR: &str = "REMOTE_ADDR";

/// Client address assumed for harness logins
pub const LOOPBACK_ADDR: &str = "127.0.0.1";

// ============================================================================
// ROUTING CONSTANTS
// ============================================================================

/// Route dispatched when none is given
pub const DEFAULT_ROUTE: &str = "common/home";

/// Fallback route dispatched when the target action is unresolvable
pub const NOT_FOUND_ROUTE: &str = "error/not_found";

/// Directory (under the application dir) holding controller files
pub const CONTROLLER_DIR: &str = "controller";

/// Directory (under the application dir) holding model files
pub const MODEL_DIR: &str = "model";

/// Prefix of controller class names
pub const CONTROLLER_PREFIX: &str = "controller";

/// Prefix of model accessor names
pub const MODEL_PREFIX: &str = "model";

/// Default response content type header
pub const DEFAULT_CONTENT_TYPE_HEADER: &str = "Content-Type: text/html; charset=utf-8";

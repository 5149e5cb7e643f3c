//! Provider Constants

// ============================================================================
// CATALOG DATABASE
// ============================================================================

/// Provider name of the in-memory catalog database
pub const DATABASE_PROVIDER_MEMORY: &str = "memory";

/// Provider name of the SQLite catalog database
pub const DATABASE_PROVIDER_SQLITE: &str = "sqlite";

/// Store table (without prefix)
pub const TABLE_STORE: &str = "store";

/// Setting table (without prefix)
pub const TABLE_SETTING: &str = "setting";

/// Language table (without prefix)
pub const TABLE_LANGUAGE: &str = "language";

/// Customer table (without prefix)
pub const TABLE_CUSTOMER: &str = "customer";

// ============================================================================
// SESSION
// ============================================================================

/// Extension of file-backed session documents
pub const SESSION_FILE_EXTENSION: &str = "json";

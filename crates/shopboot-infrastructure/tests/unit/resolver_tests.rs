//! Provider resolution tests

use serde_json::json;
use shopboot_domain::{CatalogDatabase, Error, SessionStore};
use shopboot_infrastructure::config::{
    DatabaseConfig, DatabaseDriver, SessionConfig, SessionDriver,
};
use shopboot_infrastructure::di::{resolve_database, resolve_session};
use shopboot_providers::SqliteCatalogDatabase;
use tempfile::TempDir;

#[test]
fn test_memory_database_is_default() {
    let db = resolve_database(&DatabaseConfig::default()).unwrap();

    assert_eq!(db.provider_name(), "memory");
}

#[test]
fn test_missing_sqlite_file_is_setup_error() {
    let dir = TempDir::new().unwrap();
    let config = DatabaseConfig {
        driver: DatabaseDriver::Sqlite,
        path: dir.path().join("absent.sqlite"),
        prefix: "oc_".into(),
    };

    let err = resolve_database(&config).err().unwrap();

    assert!(matches!(err, Error::Setup { .. }));
}

#[test]
fn test_existing_sqlite_file_is_opened() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.sqlite");
    SqliteCatalogDatabase::open(&path, "oc_")
        .unwrap()
        .install_schema()
        .unwrap();
    let config = DatabaseConfig {
        driver: DatabaseDriver::Sqlite,
        path,
        prefix: "oc_".into(),
    };

    let db = resolve_database(&config).unwrap();

    assert_eq!(db.provider_name(), "sqlite");
    assert!(db.active_languages().unwrap().is_empty());
}

#[test]
fn test_file_session_is_reopened_by_id() {
    let dir = TempDir::new().unwrap();
    let mut config = SessionConfig {
        driver: SessionDriver::File,
        path: dir.path().to_path_buf(),
        id: None,
    };
    let id = {
        let mut session = resolve_session(&config).unwrap();
        session.set("language", json!("en-gb")).unwrap();
        session.id().to_string()
    };
    config.id = Some(id);

    let session = resolve_session(&config).unwrap();

    assert_eq!(session.get_str("language").as_deref(), Some("en-gb"));
}

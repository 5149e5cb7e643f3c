//! Unit tests for the SQLite catalog database

use serde_json::json;
use shopboot_domain::{CatalogDatabase, Customer, Error, Language, Setting, Store};
use shopboot_providers::SqliteCatalogDatabase;
use tempfile::TempDir;

fn seeded(prefix: &str) -> SqliteCatalogDatabase {
    let db = SqliteCatalogDatabase::open_in_memory(prefix).unwrap();
    db.install_schema().unwrap();
    db.insert_store(&Store::new(2, "http://www.shop.test/outlet/")).unwrap();
    db.insert_store(&Store::new(1, "http://shop.test/outlet/")).unwrap();
    db.insert_setting(&Setting::plain(2, "config_name", "Outlet")).unwrap();
    db.insert_setting(&Setting::plain(0, "config_name", "Shop")).unwrap();
    db.insert_setting(&Setting::serialized(0, "config_image", &json!({"w": 80})))
        .unwrap();
    db.insert_language(&Language::new(1, "en-gb", "English").with_locales("en-GB,en"))
        .unwrap();
    db.insert_language(&Language::new(2, "de-de", "Deutsch").with_status(false))
        .unwrap();
    db.insert_customer(&Customer::new(5, "Jane@Example.test", "hash"))
        .unwrap();
    db
}

#[test]
fn test_store_lookup_strips_www_and_prefers_lowest_id() {
    let db = seeded("oc_");

    let store = db.find_store_by_url("http://shop.test/outlet/").unwrap();

    assert_eq!(store.map(|s| s.id), Some(1));
    assert!(db.find_store_by_url("http://other.test/").unwrap().is_none());
}

#[test]
fn test_hostile_url_is_bound_not_interpolated() {
    let db = seeded("");

    let store = db
        .find_store_by_url("http://shop.test/' OR '1'='1")
        .unwrap();

    assert!(store.is_none());
}

#[test]
fn test_settings_for_store_are_ordered_by_store() {
    let db = seeded("oc_");

    let rows = db.settings_for_store(2).unwrap();

    let ids: Vec<i64> = rows.iter().map(|row| row.store_id).collect();
    assert_eq!(ids, vec![0, 0, 2]);
    assert!(rows.iter().any(|row| row.serialized && row.key == "config_image"));
}

#[test]
fn test_only_enabled_languages_are_returned() {
    let db = seeded("oc_");

    let languages = db.active_languages().unwrap();

    assert_eq!(languages.len(), 1);
    assert_eq!(languages[0].locale, vec!["en-GB", "en"]);
}

#[test]
fn test_customer_email_is_case_insensitive() {
    let db = seeded("oc_");

    let customer = db.customer_by_email("jane@example.TEST").unwrap();

    assert_eq!(customer.map(|c| c.customer_id), Some(5));
}

#[test]
fn test_invalid_prefix_is_rejected() {
    let err = SqliteCatalogDatabase::open_in_memory("oc; DROP TABLE").err().unwrap();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_file_database_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.sqlite");
    {
        let db = SqliteCatalogDatabase::open(&path, "oc_").unwrap();
        db.install_schema().unwrap();
        db.insert_store(&Store::new(3, "http://shop.test/")).unwrap();
    }

    let reopened = SqliteCatalogDatabase::open(&path, "oc_").unwrap();

    assert_eq!(reopened.provider_name(), "sqlite");
    assert_eq!(
        reopened
            .find_store_by_url("http://shop.test/")
            .unwrap()
            .map(|s| s.id),
        Some(3)
    );
}

//! Unit tests for settings merging

use crate::support::FakeDb;
use proptest::prelude::*;
use serde_json::json;
use shopboot_application::SettingsMerger;
use shopboot_domain::{Error, Setting, Settings};

#[test]
fn test_store_value_overrides_global_value() {
    let db = FakeDb {
        settings: vec![
            Setting::plain(2, "config_name", "Outlet"),
            Setting::plain(0, "config_name", "Shop"),
            Setting::plain(0, "config_email", "shop@example.test"),
            Setting::plain(9, "config_name", "Other"),
        ],
        ..FakeDb::default()
    };
    let mut settings = Settings::new();

    let applied = SettingsMerger::new(&db).merge(2, &mut settings).unwrap();

    assert_eq!(applied, 3);
    assert_eq!(settings.get_str("config_name").as_deref(), Some("Outlet"));
    assert_eq!(
        settings.get_str("config_email").as_deref(),
        Some("shop@example.test")
    );
}

#[test]
fn test_serialized_values_are_decoded() {
    let value = json!({"width": 80, "height": 60});
    let db = FakeDb {
        settings: vec![Setting::serialized(0, "config_image", &value)],
        ..FakeDb::default()
    };
    let mut settings = Settings::new();

    SettingsMerger::new(&db).merge(0, &mut settings).unwrap();

    assert_eq!(settings.get("config_image"), Some(&value));
}

#[test]
fn test_malformed_serialized_value_fails() {
    let mut row = Setting::plain(0, "config_image", "{not json");
    row.serialized = true;
    let db = FakeDb {
        settings: vec![row],
        ..FakeDb::default()
    };
    let mut settings = Settings::new();

    let err = SettingsMerger::new(&db).merge(0, &mut settings).unwrap_err();

    assert!(matches!(err, Error::SettingDecode { ref key, .. } if key == "config_image"));
}

#[test]
fn test_merge_is_idempotent() {
    let db = FakeDb {
        settings: vec![
            Setting::plain(0, "config_name", "Shop"),
            Setting::plain(1, "config_name", "Outlet"),
        ],
        ..FakeDb::default()
    };
    let merger = SettingsMerger::new(&db);
    let mut once = Settings::new();
    merger.merge(1, &mut once).unwrap();
    let mut twice = once.clone();
    merger.merge(1, &mut twice).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_no_rows_leaves_settings_untouched() {
    let db = FakeDb::default();
    let mut settings = Settings::new();
    settings.set("config_url", "http://shop.test/");

    let applied = SettingsMerger::new(&db).merge(0, &mut settings).unwrap();

    assert_eq!(applied, 0);
    assert_eq!(settings.len(), 1);
}

proptest! {
    #[test]
    fn test_override_law(
        global in "[a-z]{0,12}",
        store in "[a-z]{0,12}",
        store_id in 1_i64..50,
    ) {
        let db = FakeDb {
            settings: vec![
                Setting::plain(store_id, "config_name", store.clone()),
                Setting::plain(0, "config_name", global.clone()),
                Setting::plain(0, "config_global_only", global.clone()),
            ],
            ..FakeDb::default()
        };
        let mut settings = Settings::new();
        SettingsMerger::new(&db).merge(store_id, &mut settings).unwrap();

        prop_assert_eq!(settings.get_str("config_name"), Some(store));
        prop_assert_eq!(settings.get_str("config_global_only"), Some(global));
    }
}

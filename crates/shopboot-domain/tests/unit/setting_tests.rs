//! Unit tests for setting decoding

use serde_json::json;
use shopboot_domain::{Error, Setting};

#[test]
fn test_plain_value_is_string() {
    let setting = Setting::plain(0, "config_name", "Shop");
    assert_eq!(setting.decoded_value().unwrap(), json!("Shop"));
}

#[test]
fn test_serialized_round_trip() {
    let original = json!({"width": 80, "tags": ["a", "b"]});
    let setting = Setting::serialized(0, "config_image", &original);

    assert!(setting.serialized);
    assert_eq!(setting.decoded_value().unwrap(), original);
    assert_eq!(setting.decoded_value().unwrap(), original);
}

#[test]
fn test_plain_value_that_looks_like_json_is_not_decoded() {
    let setting = Setting::plain(0, "config_raw", "[1,2]");
    assert_eq!(setting.decoded_value().unwrap(), json!("[1,2]"));
}

#[test]
fn test_malformed_serialized_value() {
    let setting = Setting {
        store_id: 0,
        key: "config_broken".to_string(),
        value: "{not json".to_string(),
        serialized: true,
    };

    match setting.decoded_value() {
        Err(Error::SettingDecode { key, .. }) => assert_eq!(key, "config_broken"),
        other => panic!("Expected SettingDecode error, got {other:?}"),
    }
}

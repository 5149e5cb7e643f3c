//! End-to-end bootstrap tests

use crate::fixture::{Echo, installation};
use chrono::{Duration, TimeZone, Utc};
use shopboot_domain::{
    Controller, ControllerScope, Customer, DEFAULT_CONTENT_TYPE_HEADER, Error, Language,
    LocaleSource, RequestContext, SessionStore, Setting, Store, TRACKING_COOKIE_TTL_SECS,
};
use shopboot_infrastructure::crypto::Argon2PasswordVerifier;
use shopboot_infrastructure::{ConfigBuilder, Harness, HarnessBuilder};
use shopboot_providers::InMemoryCatalogDatabase;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug)]
struct Product {
    store_id: i64,
}

fn catalog_db() -> InMemoryCatalogDatabase {
    InMemoryCatalogDatabase::new()
        .with_language(Language::new(1, "en-gb", "English").with_locales("en-GB,en"))
        .with_language(Language::new(2, "de-de", "Deutsch").with_locales("de-DE,de"))
        .with_setting(Setting::plain(0, "config_language", "en-gb"))
        .with_setting(Setting::plain(0, "config_compression", "4"))
}

fn builder(root: &Path, request: RequestContext) -> HarnessBuilder {
    HarnessBuilder::new(root)
        .with_request(request)
        .with_database(catalog_db())
}

fn storefront(root: &Path) -> Harness {
    builder(root, RequestContext::new("shop.test", "/index.php"))
        .with_controller("common/home", |_: &ControllerScope<'_>| {
            Box::new(Echo("Welcome".into())) as Box<dyn Controller>
        })
        .unwrap()
        .with_controller("error/not_found", |_: &ControllerScope<'_>| {
            Box::new(Echo("Page not found".into())) as Box<dyn Controller>
        })
        .unwrap()
        .with_model("catalog/product", |scope: &ControllerScope<'_>| Product {
            store_id: scope.settings.get_i64("config_store_id").unwrap_or(-1),
        })
        .unwrap()
        .bootstrap()
        .unwrap()
}

#[test]
fn test_default_store_bootstrap() {
    let dir = installation();
    let harness = storefront(dir.path());

    assert_eq!(harness.store_id(), 0);
    assert_eq!(
        harness.settings().get_str("config_url").as_deref(),
        Some("http://shop.test/")
    );
    assert_eq!(
        harness.settings().get_str("config_ssl").as_deref(),
        Some("https://shop.test/")
    );
    assert_eq!(harness.locale().code, "en-gb");
    assert_eq!(harness.locale().source, LocaleSource::Default);
    assert_eq!(harness.language().get("heading_title"), "Welcome");
    assert_eq!(harness.response().headers(), [DEFAULT_CONTENT_TYPE_HEADER]);
    assert_eq!(harness.response().compression(), 4);
    assert_eq!(
        harness.url().link("product/product", "product_id=1", false),
        "http://shop.test/index.php?route=product/product&amp;product_id=1"
    );
}

#[test]
fn test_default_store_ignores_stored_urls() {
    let dir = installation();
    let db = catalog_db()
        .with_store(Store::new(5, "http://other.test/"))
        .with_setting(Setting::plain(0, "config_url", "http://stale.test/"))
        .with_setting(Setting::plain(0, "config_ssl", "https://stale.test/"));

    let harness = HarnessBuilder::new(dir.path())
        .with_request(RequestContext::new("shop.test", "/index.php"))
        .with_database(db)
        .bootstrap()
        .unwrap();

    assert_eq!(harness.store_id(), 0);
    assert_eq!(
        harness.settings().get_str("config_url"),
        Some(harness.config().http_server.clone())
    );
    assert_eq!(
        harness.settings().get_str("config_ssl"),
        Some(harness.config().https_server.clone())
    );
    assert_eq!(harness.url().base(), "http://shop.test/");
}

#[test]
fn test_store_settings_override_install_urls() {
    let dir = installation();
    let db = catalog_db()
        .with_store(Store::new(3, "http://shop.test/"))
        .with_setting(Setting::plain(3, "config_url", "http://shop.test/"))
        .with_setting(Setting::plain(3, "config_ssl", "https://secure.shop.test/"));

    let harness = HarnessBuilder::new(dir.path())
        .with_request(RequestContext::new("www.shop.test", "/index.php"))
        .with_database(db)
        .bootstrap()
        .unwrap();

    assert_eq!(harness.store_id(), 3);
    assert_eq!(harness.settings().get_i64("config_store_id"), Some(3));
    assert_eq!(
        harness.settings().get_str("config_ssl").as_deref(),
        Some("https://secure.shop.test/")
    );
}

#[test]
fn test_browser_language_selects_pack() {
    let dir = installation();
    let request = RequestContext::new("shop.test", "/index.php")
        .with_accept_language("de-DE,de;q=0.9");

    let harness = builder(dir.path(), request).bootstrap().unwrap();

    assert_eq!(harness.locale().code, "de-de");
    assert_eq!(harness.locale().source, LocaleSource::Browser);
    assert_eq!(harness.language().get("heading_title"), "Willkommen");
    assert_eq!(harness.settings().get_i64("config_language_id"), Some(2));
    assert_eq!(harness.session().get_str("language").as_deref(), Some("de-de"));
    assert_eq!(
        harness.cookies().last("language").map(|c| c.value.as_str()),
        Some("de-de")
    );
}

#[test]
fn test_dispatch_empty_route_runs_home() {
    let dir = installation();
    let mut harness = storefront(dir.path());

    let response = harness.dispatch_action("").unwrap();

    assert_eq!(response.output(), "Welcome");
}

#[test]
fn test_dispatch_unknown_route_runs_not_found() {
    let dir = installation();
    let mut harness = storefront(dir.path());

    harness.dispatch_action("account/wishlist").unwrap();

    assert_eq!(harness.output(), "Page not found");
}

#[test]
fn test_load_controller_by_route() {
    let dir = installation();
    let harness = storefront(dir.path());

    let controller = harness.load_controller_by_route("common/home").unwrap();
    assert_eq!(controller.downcast_ref::<Echo>().unwrap().0, "Welcome");

    let err = harness
        .load_controller_by_route("account/wishlist")
        .err()
        .unwrap();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_model_is_built_once() {
    let dir = installation();
    let mut harness = storefront(dir.path());

    let first: Arc<Product> = harness.load_model_by_route("catalog/product").unwrap();
    let second: Arc<Product> = harness.load_model_by_route("catalog/product").unwrap();

    assert_eq!(first.store_id, 0);
    assert!(Arc::ptr_eq(&first, &second));
    assert!(harness.registry().has("model_catalog_product"));
}

#[test]
fn test_missing_model_file_is_not_found() {
    let dir = installation();
    let mut harness = storefront(dir.path());

    let err = harness
        .load_model_by_route::<Product>("catalog/category")
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_tracking_cookie_is_issued() {
    let dir = installation();
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let request = RequestContext::new("shop.test", "/index.php").with_query("tracking", "aff42");

    let harness = builder(dir.path(), request).at(now).bootstrap().unwrap();

    let cookie = harness.cookies().last("tracking").unwrap();
    assert_eq!(cookie.value, "aff42");
    assert_eq!(cookie.expires, now + Duration::seconds(TRACKING_COOKIE_TTL_SECS));
}

#[test]
fn test_customer_login_and_logout() {
    let dir = installation();
    let hash = Argon2PasswordVerifier::new().hash_password("secret").unwrap();
    let db = catalog_db().with_customer(Customer::new(7, "jane@shop.test", hash));
    let mut harness = HarnessBuilder::new(dir.path())
        .with_request(RequestContext::new("shop.test", "/index.php"))
        .with_database(db)
        .bootstrap()
        .unwrap();

    let err = harness
        .customer_login("jane@shop.test", "wrong", false)
        .unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }));
    assert!(!harness.is_customer_logged());

    let customer = harness
        .customer_login("Jane@Shop.test", "secret", false)
        .unwrap();
    assert_eq!(customer.customer_id, 7);
    assert!(harness.is_customer_logged());
    assert_eq!(harness.request().remote_addr(), Some("127.0.0.1"));

    assert!(harness.customer_logout().unwrap());
    assert!(!harness.is_customer_logged());
    assert!(!harness.customer_logout().unwrap());
}

#[test]
fn test_missing_configuration_is_setup_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let err = builder(dir.path(), RequestContext::default())
        .bootstrap()
        .err()
        .unwrap();

    assert!(matches!(err, Error::Setup { .. }));
}

#[test]
fn test_injected_configuration_is_used() {
    let dir = installation();
    let config = ConfigBuilder::new()
        .with_servers("http://injected.test/", "https://injected.test/")
        .build();

    let harness = builder(dir.path(), RequestContext::new("shop.test", "/index.php"))
        .with_config(config)
        .bootstrap()
        .unwrap();

    assert_eq!(
        harness.settings().get_str("config_url").as_deref(),
        Some("http://injected.test/")
    );
    assert_eq!(harness.config().paths.language, dir.path().join("catalog/language"));
}

#[test]
fn test_injected_configuration_is_validated() {
    let dir = installation();
    let config = ConfigBuilder::new()
        .with_servers("http://shop.test", "https://shop.test/")
        .build();

    let err = builder(dir.path(), RequestContext::new("shop.test", "/index.php"))
        .with_config(config)
        .bootstrap()
        .err()
        .unwrap();

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_admin_environment_reads_root_config() {
    let dir = installation();
    let mut admin = builder(dir.path(), RequestContext::new("shop.test", "/admin/index.php"));
    admin.set_environment("admin").unwrap();

    let err = admin.bootstrap().err().unwrap();

    assert!(matches!(err, Error::Setup { .. }));
}

#[test]
fn test_unknown_environment_tag_is_rejected() {
    let mut builder = HarnessBuilder::new("/srv/shop");

    assert!(builder.set_environment("install").is_err());
}

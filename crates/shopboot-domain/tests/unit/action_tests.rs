//! Unit tests for route/action naming

use shopboot_domain::Action;
use std::path::Path;

#[test]
fn test_resolution_is_deterministic() {
    let first = Action::parse("catalog/product").unwrap();
    let second = Action::parse("catalog/product").unwrap();

    let app = Path::new("/srv/shop/catalog");
    assert_eq!(first.resolve(app, "php"), second.resolve(app, "php"));

    let target = first.resolve(app, "php");
    assert_eq!(
        target.file,
        Path::new("/srv/shop/catalog/controller/catalog/product.php")
    );
    assert_eq!(target.class, "controller_catalog_product");
}

#[test]
fn test_model_names() {
    let action = Action::parse("account/customer").unwrap();
    assert_eq!(action.model_accessor(), "model_account_customer");
    assert_eq!(
        action.model_file("php"),
        Path::new("model").join("account/customer.php")
    );
}

#[test]
fn test_three_segment_route() {
    let action = Action::parse("module/payment/paypal").unwrap();
    assert_eq!(action.symbol_stem(), "_module_payment_paypal");
    assert_eq!(action.segments().count(), 3);
}

#[test]
fn test_display_is_route() {
    let action = Action::parse("error/not_found").unwrap();
    assert_eq!(action.to_string(), "error/not_found");
}

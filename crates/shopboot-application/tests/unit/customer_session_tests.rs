//! Unit tests for customer login helpers

use crate::support::{FakeDb, MapSession, PlainVerifier};
use shopboot_application::CustomerSession;
use shopboot_domain::{Customer, Error, SessionStore};

fn db() -> FakeDb {
    let mut disabled = Customer::new(8, "gone@example.test", "plain:secret");
    disabled.status = false;
    FakeDb {
        customers: vec![Customer::new(5, "Jane@Example.test", "plain:secret"), disabled],
        ..FakeDb::default()
    }
}

#[test]
fn test_login_records_customer_in_session() {
    let db = db();
    let mut session = MapSession::default();

    let customer = CustomerSession::new(&db, &PlainVerifier)
        .login(&mut session, "jane@example.test", "secret", false)
        .unwrap();

    assert_eq!(customer.customer_id, 5);
    assert_eq!(CustomerSession::customer_id(&session), Some(5));
    assert!(session.get("customer_id").is_some());
}

#[test]
fn test_wrong_password_is_rejected_unless_overridden() {
    let db = db();
    let mut session = MapSession::default();
    let helper = CustomerSession::new(&db, &PlainVerifier);

    let err = helper
        .login(&mut session, "jane@example.test", "nope", false)
        .unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }));
    assert!(!CustomerSession::is_logged(&session));

    helper
        .login(&mut session, "jane@example.test", "nope", true)
        .unwrap();
    assert!(CustomerSession::is_logged(&session));
}

#[test]
fn test_unknown_or_disabled_customer_is_rejected() {
    let db = db();
    let mut session = MapSession::default();
    let helper = CustomerSession::new(&db, &PlainVerifier);

    for email in ["nobody@example.test", "gone@example.test"] {
        let err = helper.login(&mut session, email, "secret", true).unwrap_err();
        assert!(matches!(err, Error::Authentication { .. }), "{email}");
    }
}

#[test]
fn test_logout_only_when_logged_in() {
    let db = db();
    let mut session = MapSession::default();

    assert!(!CustomerSession::logout(&mut session).unwrap());

    CustomerSession::new(&db, &PlainVerifier)
        .login(&mut session, "jane@example.test", "secret", false)
        .unwrap();
    assert!(CustomerSession::logout(&mut session).unwrap());
    assert!(!CustomerSession::is_logged(&session));
}

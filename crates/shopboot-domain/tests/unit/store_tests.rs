//! Unit tests for store URL normalization

use proptest::prelude::*;
use shopboot_domain::{Store, candidate_store_url, strip_www};

#[test]
fn test_strip_www_removes_every_occurrence() {
    assert_eq!(strip_www("http://www.shop.test/"), "http://shop.test/");
    assert_eq!(strip_www("shop.test"), "shop.test");
}

#[test]
fn test_store_matches_candidate_for_both_hosts() {
    let store = Store::new(2, "http://www.shop.test/outlet/");
    let bare = candidate_store_url("shop.test", "/outlet/index.php");
    let www = candidate_store_url("www.shop.test", "/outlet/index.php");

    assert_eq!(bare, www);
    assert!(store.matches(&bare));
}

proptest! {
    #[test]
    fn test_candidate_is_www_stable(
        host in "[a-z]{1,10}\\.[a-z]{2,4}",
        dir in "(/[a-z]{1,8}){0,2}",
    ) {
        let script = format!("{dir}/index.php");
        let bare = candidate_store_url(&host, &script);
        let www = candidate_store_url(&format!("www.{host}"), &script);

        prop_assert_eq!(&bare, &www);
        prop_assert!(bare.ends_with('/'));
        prop_assert!(bare.starts_with("http://"));
    }
}

//! Unit tests for the recording cookie jar

use chrono::Utc;
use shopboot_domain::{Cookie, CookieJar};
use shopboot_providers::RecordingCookieJar;

#[test]
fn test_last_returns_most_recent_cookie() {
    let now = Utc::now();
    let mut jar = RecordingCookieJar::new();
    jar.set_cookie(Cookie::new("language", "en-gb", now, 60)).unwrap();
    jar.set_cookie(Cookie::new("tracking", "abc", now, 60)).unwrap();
    jar.set_cookie(Cookie::new("language", "de-de", now, 60)).unwrap();

    assert_eq!(jar.issued().len(), 3);
    assert_eq!(jar.last("language").map(|c| c.value.as_str()), Some("de-de"));
    assert!(jar.last("currency").is_none());

    jar.clear();
    assert!(jar.issued().is_empty());
}

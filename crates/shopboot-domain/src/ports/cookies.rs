//! Cookie Port

use crate::error::Result;
use crate::value_objects::Cookie;

/// Cookie write primitive
pub trait CookieJar {
    /// Ask the client to store a cookie
    fn set_cookie(&mut self, cookie: Cookie) -> Result<()>;
}

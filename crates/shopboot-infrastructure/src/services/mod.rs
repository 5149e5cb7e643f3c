//! Services built during bootstrap
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`Url`] | Links to storefront routes |
//! | [`LanguagePack`] | Translation strings of the resolved language |
//! | [`DefaultFrontController`] | Dispatches an action with a fallback |

pub mod front;
pub mod language_pack;
pub mod url;

pub use front::DefaultFrontController;
pub use language_pack::LanguagePack;
pub use url::Url;

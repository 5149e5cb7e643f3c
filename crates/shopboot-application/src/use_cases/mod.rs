//! Use cases of the bootstrap pipeline
//!
//! | Use case | Step |
//! |----------|------|
//! | [`StoreResolver`] | host + script path → store id |
//! | [`SettingsMerger`] | store id → merged settings |
//! | [`LocaleResolver`] | session/cookie/browser/default → locale |
//! | [`ActionResolver`] | route → controller file and class |
//! | [`ControllerCatalog`] | class → controller instance |
//! | [`ModelLoader`] | route → model in the registry |
//! | [`CustomerSession`] | login/logout helpers |

pub mod action_resolver;
pub mod customer_session;
pub mod locale_resolver;
pub mod model_loader;
pub mod settings_merger;
pub mod store_resolver;

pub use action_resolver::{ActionResolver, ControllerCatalog};
pub use customer_session::{CustomerSession, PasswordVerifier};
pub use locale_resolver::{ActiveLanguages, LocaleResolver, negotiate_browser_language};
pub use model_loader::ModelLoader;
pub use settings_merger::{SettingsMerger, apply_settings};
pub use store_resolver::{StoreResolution, StoreResolver};

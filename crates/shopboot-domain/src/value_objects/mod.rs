//! Domain Value Objects
//!
//! Immutable values the bootstrap pipeline passes between its steps.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Environment`] | Which half of the application is bootstrapped |
//! | [`Action`] | A route and the controller/model names it resolves to |
//! | [`Settings`] | Merged key/value configuration |
//! | [`RequestContext`] | Server, cookie and query variables of the simulated request |
//! | [`Cookie`] | A cookie write issued by the pipeline |
//! | [`LocaleInfo`] | The resolved language and its metadata |
//! | [`Response`] | Output collected from a dispatched action |

/// Route/action naming convention
pub mod action;
/// Cookie writes
pub mod cookie;
/// Environment tag
pub mod environment;
/// Locale decision
pub mod locale;
/// Simulated request
pub mod request;
/// Response abstraction
pub mod response;
/// Merged settings
pub mod settings;

pub use action::{Action, ActionTarget};
pub use cookie::Cookie;
pub use environment::Environment;
pub use locale::{LocaleInfo, LocaleSource};
pub use request::RequestContext;
pub use response::Response;
pub use settings::Settings;

//! Controller Ports
//!
//! Controllers and models belong to the application under test. The harness
//! only knows how to build them (factories registered by name) and how to run
//! a controller against a [`Response`].

use crate::error::Result;
use crate::value_objects::{Action, LocaleInfo, RequestContext, Response, Settings};
use downcast_rs::{Downcast, impl_downcast};
use std::any::Any;
use std::sync::Arc;

/// Read-only view of the bootstrapped state handed to factories
#[derive(Debug, Clone, Copy)]
pub struct ControllerScope<'a> {
    /// Merged settings
    pub settings: &'a Settings,
    /// Simulated request
    pub request: &'a RequestContext,
    /// Resolved locale
    pub locale: &'a LocaleInfo,
}

/// An application controller
///
/// Downcast a `Box<dyn Controller>` to inspect the concrete type in tests.
pub trait Controller: Downcast {
    /// Run the controller's default action, writing into `response`
    fn execute(&mut self, response: &mut Response) -> Result<()>;
}
impl_downcast!(Controller);

/// Builds a controller instance
pub type ControllerFactory = Arc<dyn Fn(&ControllerScope<'_>) -> Box<dyn Controller> + Send + Sync>;

/// A loaded model as stored in the service registry
pub type ModelInstance = Arc<dyn Any + Send + Sync>;

/// Builds a model instance
pub type ModelFactory = Arc<dyn Fn(&ControllerScope<'_>) -> ModelInstance + Send + Sync>;

/// Front controller abstraction
pub trait FrontController {
    /// Run `action`, or `fallback` when `action` cannot be resolved
    ///
    /// Returns the action that actually ran.
    fn dispatch(
        &self,
        action: &Action,
        fallback: &Action,
        scope: &ControllerScope<'_>,
        response: &mut Response,
    ) -> Result<Action>;
}

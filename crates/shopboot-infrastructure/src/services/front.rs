//! Front controller

use shopboot_application::{ActionResolver, ControllerCatalog};
use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::{ControllerScope, FrontController};
use shopboot_domain::value_objects::{Action, Response};
use tracing::{debug, warn};

/// Runs controllers located by an [`ActionResolver`] and built by a
/// [`ControllerCatalog`]
#[derive(Debug, Clone)]
pub struct DefaultFrontController {
    resolver: ActionResolver,
    catalog: ControllerCatalog,
}

impl DefaultFrontController {
    /// Create a front controller
    pub fn new(resolver: ActionResolver, catalog: ControllerCatalog) -> Self {
        Self { resolver, catalog }
    }

    /// Route resolver
    pub fn resolver(&self) -> &ActionResolver {
        &self.resolver
    }

    /// Registered controllers
    pub fn catalog(&self) -> &ControllerCatalog {
        &self.catalog
    }

    fn run(
        &self,
        action: &Action,
        scope: &ControllerScope<'_>,
        response: &mut Response,
    ) -> Result<()> {
        let mut controller = self.catalog.load(&self.resolver, action, scope)?;
        controller.execute(response)
    }
}

impl FrontController for DefaultFrontController {
    fn dispatch(
        &self,
        action: &Action,
        fallback: &Action,
        scope: &ControllerScope<'_>,
        response: &mut Response,
    ) -> Result<Action> {
        match self.run(action, scope, response) {
            Ok(()) => {
                debug!(route = %action, "Dispatched action");
                Ok(action.clone())
            }
            Err(Error::NotFound { resource }) => {
                warn!(route = %action, fallback = %fallback, %resource, "Dispatching fallback");
                self.run(fallback, scope, response)?;
                Ok(fallback.clone())
            }
            Err(err) => Err(err),
        }
    }
}

//! Model loading
//!
//! `load` places a model in the service registry under its accessor name
//! (`model_catalog_product` for `catalog/product`); `model` loads and then
//! returns that registry entry.

use crate::registry::ServiceRegistry;
use crate::use_cases::action_resolver::ActionResolver;
use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::{ControllerScope, ModelFactory, ModelInstance};
use shopboot_domain::value_objects::Action;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Model factories keyed by route
#[derive(Clone, Default)]
pub struct ModelLoader {
    factories: HashMap<String, ModelFactory>,
}

impl ModelLoader {
    /// Empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for the model at `route`
    pub fn register<F, M>(&mut self, route: &str, factory: F) -> Result<()>
    where
        F: Fn(&ControllerScope<'_>) -> M + Send + Sync + 'static,
        M: Any + Send + Sync,
    {
        let action = Action::parse(route)?;
        let factory: ModelFactory = Arc::new(move |scope: &ControllerScope<'_>| {
            Arc::new(factory(scope)) as ModelInstance
        });
        self.factories.insert(action.route().to_string(), factory);
        Ok(())
    }

    /// Load the model at `route` into `registry`
    ///
    /// The model file must exist and a factory must be registered. A model
    /// already in the registry is not rebuilt.
    pub fn load(
        &self,
        route: &str,
        resolver: &ActionResolver,
        scope: &ControllerScope<'_>,
        registry: &mut ServiceRegistry,
    ) -> Result<String> {
        let action = Action::parse(route)?;
        let accessor = action.model_accessor();
        if registry.has(&accessor) {
            return Ok(accessor);
        }

        resolver.locate_model(&action)?;
        let factory = self
            .factories
            .get(action.route())
            .ok_or_else(|| Error::not_found(format!("Model factory for route '{action}'")))?;

        registry.set_shared(accessor.clone(), factory(scope));
        debug!(route = %action, accessor = %accessor, "Loaded model");
        Ok(accessor)
    }

    /// Load the model at `route` and return it as `T`
    pub fn model<T: Any + Send + Sync>(
        &self,
        route: &str,
        resolver: &ActionResolver,
        scope: &ControllerScope<'_>,
        registry: &mut ServiceRegistry,
    ) -> Result<Arc<T>> {
        let accessor = self.load(route, resolver, scope, registry)?;
        registry.get::<T>(&accessor).ok_or_else(|| {
            Error::lookup(format!(
                "Registry entry '{accessor}' is not a {}",
                std::any::type_name::<T>()
            ))
        })
    }
}

impl fmt::Debug for ModelLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut routes: Vec<&String> = self.factories.keys().collect();
        routes.sort();
        f.debug_struct("ModelLoader").field("routes", &routes).finish()
    }
}

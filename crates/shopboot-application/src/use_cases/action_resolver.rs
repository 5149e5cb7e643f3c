//! Route/action resolution
//!
//! Turns a route into the controller file and class that implement it, and
//! instantiates controllers for tests that want to call them directly.

use shopboot_domain::error::{Error, Result};
use shopboot_domain::ports::{Controller, ControllerFactory, ControllerScope};
use shopboot_domain::value_objects::{Action, ActionTarget};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Maps routes to files under the application directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResolver {
    application_dir: PathBuf,
    extension: String,
}

impl ActionResolver {
    /// Resolver for files named `<route>.<extension>` under `application_dir`
    pub fn new(application_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            application_dir: application_dir.into(),
            extension: extension.into(),
        }
    }

    /// Application directory
    pub fn application_dir(&self) -> &Path {
        &self.application_dir
    }

    /// Controller file and class for `route`, whether or not the file exists
    pub fn resolve(&self, route: &str) -> Result<ActionTarget> {
        let action = Action::parse(route)?;
        Ok(self.target(&action))
    }

    /// Controller file and class for an already parsed action
    pub fn target(&self, action: &Action) -> ActionTarget {
        action.resolve(&self.application_dir, &self.extension)
    }

    /// Controller target for `action`, failing when its file does not exist
    pub fn locate(&self, action: &Action) -> Result<ActionTarget> {
        let target = self.target(action);
        if !target.file.is_file() {
            debug!(route = %action, file = %target.file.display(), "Controller file missing");
            return Err(Error::not_found(format!(
                "Controller for route '{action}' ({})",
                target.file.display()
            )));
        }
        Ok(target)
    }

    /// Model file for `action`, failing when it does not exist
    pub fn locate_model(&self, action: &Action) -> Result<PathBuf> {
        let file = self.application_dir.join(action.model_file(&self.extension));
        if !file.is_file() {
            return Err(Error::not_found(format!(
                "Model for route '{action}' ({})",
                file.display()
            )));
        }
        Ok(file)
    }
}

/// Controller factories keyed by class name
#[derive(Clone, Default)]
pub struct ControllerCatalog {
    factories: HashMap<String, ControllerFactory>,
}

impl ControllerCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for the controller implementing `route`
    pub fn register<F>(&mut self, route: &str, factory: F) -> Result<()>
    where
        F: Fn(&ControllerScope<'_>) -> Box<dyn Controller> + Send + Sync + 'static,
    {
        let action = Action::parse(route)?;
        self.factories.insert(action.class_name(), Arc::new(factory));
        Ok(())
    }

    /// Whether a factory exists for `class`
    pub fn contains(&self, class: &str) -> bool {
        self.factories.contains_key(class)
    }

    /// Instantiate the controller class of `target`
    pub fn instantiate(
        &self,
        target: &ActionTarget,
        scope: &ControllerScope<'_>,
    ) -> Result<Box<dyn Controller>> {
        let factory = self.factories.get(&target.class).ok_or_else(|| {
            Error::not_found(format!("Controller class '{}'", target.class))
        })?;
        Ok(factory(scope))
    }

    /// Locate and instantiate the controller for `action`
    pub fn load(
        &self,
        resolver: &ActionResolver,
        action: &Action,
        scope: &ControllerScope<'_>,
    ) -> Result<Box<dyn Controller>> {
        let target = resolver.locate(action)?;
        self.instantiate(&target, scope)
    }
}

impl fmt::Debug for ControllerCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes: Vec<&String> = self.factories.keys().collect();
        classes.sort();
        f.debug_struct("ControllerCatalog")
            .field("classes", &classes)
            .finish()
    }
}

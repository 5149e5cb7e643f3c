//! Bootstrap Harness - the storefront's request initialization, outside HTTP
//!
//! Runs the initialization pipeline once and keeps everything it produced in
//! typed slots, so a test can call controllers and models directly.
//!
//! ## Pipeline
//!
//! ```text
//! InstallConfig → Database → Store → Settings → Url/Response
//!                                         │
//!                     Session/Cookies → Locale → LanguagePack → Front
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut harness = HarnessBuilder::new("/srv/shop")
//!     .with_request(RequestContext::new("shop.test", "/index.php"))
//!     .with_controller("common/home", |_| Box::new(Home::default()))?
//!     .bootstrap()?;
//!
//! harness.dispatch_action("")?;
//! assert!(harness.output().contains("Welcome"));
//! ```

use crate::config::{ConfigLoader, InstallConfig, validate_install_config};
use crate::crypto::Argon2PasswordVerifier;
use crate::di::resolver::{resolve_database, resolve_session};
use crate::logging::init_logging;
use crate::services::{DefaultFrontController, LanguagePack, Url};
use crate::utils::TimedOperation;
use chrono::{DateTime, Utc};
use shopboot_application::{
    ActionResolver, ControllerCatalog, CustomerSession, LocaleResolver, ModelLoader,
    ServiceRegistry, SettingsMerger, StoreResolution, StoreResolver,
};
use shopboot_domain::constants::{
    DEFAULT_CONTENT_TYPE_HEADER, DEFAULT_ROUTE, LOOPBACK_ADDR, NOT_FOUND_ROUTE,
    SETTING_COMPRESSION, SETTING_SSL, SETTING_STORE_ID, SETTING_URL, TRACKING_COOKIE_TTL_SECS,
    TRACKING_KEY,
};
use shopboot_domain::entities::Customer;
use shopboot_domain::error::Result;
use shopboot_domain::ports::{
    CatalogDatabase, Controller, ControllerScope, CookieJar, FrontController, PasswordVerifier,
    SessionStore,
};
use shopboot_domain::value_objects::{
    Action, Cookie, Environment, LocaleInfo, RequestContext, Response, Settings,
};
use shopboot_providers::RecordingCookieJar;
use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Collects the inputs of a bootstrap
///
/// Anything not supplied is built from the installation's configuration.
pub struct HarnessBuilder {
    root: PathBuf,
    environment: Environment,
    config: Option<InstallConfig>,
    request: RequestContext,
    database: Option<Box<dyn CatalogDatabase>>,
    session: Option<Box<dyn SessionStore>>,
    verifier: Option<Box<dyn PasswordVerifier>>,
    controllers: ControllerCatalog,
    models: ModelLoader,
    now: Option<DateTime<Utc>>,
}

impl HarnessBuilder {
    /// Builder for the installation at `root`, in the catalog environment
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            environment: Environment::default(),
            config: None,
            request: RequestContext::default(),
            database: None,
            session: None,
            verifier: None,
            controllers: ControllerCatalog::new(),
            models: ModelLoader::new(),
            now: None,
        }
    }

    /// Install root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Change the install root
    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.root = root.into();
    }

    /// Environment tag
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Change the environment from its tag (`admin` or `catalog`)
    pub fn set_environment(&mut self, tag: &str) -> Result<()> {
        self.environment = tag.parse()?;
        Ok(())
    }

    /// Bootstrap the given environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Use `config` instead of loading the installation's configuration file
    ///
    /// It is validated like a loaded file, and relative paths are resolved
    /// against the root at bootstrap.
    pub fn with_config(mut self, config: InstallConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Simulated request
    pub fn with_request(mut self, request: RequestContext) -> Self {
        self.request = request;
        self
    }

    /// Use `database` instead of the configured one
    pub fn with_database(mut self, database: impl CatalogDatabase + 'static) -> Self {
        self.database = Some(Box::new(database));
        self
    }

    /// Use `session` instead of the configured one
    pub fn with_session(mut self, session: impl SessionStore + 'static) -> Self {
        self.session = Some(Box::new(session));
        self
    }

    /// Check customer passwords with `verifier` instead of Argon2
    pub fn with_password_verifier(mut self, verifier: impl PasswordVerifier + 'static) -> Self {
        self.verifier = Some(Box::new(verifier));
        self
    }

    /// Register the controller implementing `route`
    pub fn with_controller<F>(mut self, route: &str, factory: F) -> Result<Self>
    where
        F: Fn(&ControllerScope<'_>) -> Box<dyn Controller> + Send + Sync + 'static,
    {
        self.controllers.register(route, factory)?;
        Ok(self)
    }

    /// Register the model at `route`
    pub fn with_model<F, M>(mut self, route: &str, factory: F) -> Result<Self>
    where
        F: Fn(&ControllerScope<'_>) -> M + Send + Sync + 'static,
        M: Any + Send + Sync,
    {
        self.models.register(route, factory)?;
        Ok(self)
    }

    /// Stamp cookies relative to `now` instead of the current time
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Run the initialization pipeline
    pub fn bootstrap(self) -> Result<Harness> {
        let timer = TimedOperation::start();
        let now = self.now.unwrap_or_else(Utc::now);

        let config = match self.config {
            Some(config) => {
                validate_install_config(&config)?;
                config.resolved(&self.root)
            }
            None => ConfigLoader::new(&self.root, self.environment).load()?,
        };
        init_logging(&config.logging)?;

        let database = match self.database {
            Some(database) => database,
            None => resolve_database(&config.database)?,
        };

        let mut settings = Settings::new();
        let store = StoreResolver::new(database.as_ref()).resolve(&self.request)?;
        settings.set(SETTING_STORE_ID, store.store_id);
        SettingsMerger::new(database.as_ref()).merge(store.store_id, &mut settings)?;
        if store.is_default() {
            settings.set(SETTING_URL, config.http_server.clone());
            settings.set(SETTING_SSL, config.https_server.clone());
        }

        let url = Url::from_settings(&settings);

        let mut response = Response::new();
        response.add_header(DEFAULT_CONTENT_TYPE_HEADER);
        response.set_compression(settings.get_i64(SETTING_COMPRESSION).unwrap_or(0));

        let mut session = match self.session {
            Some(session) => session,
            None => resolve_session(&config.session)?,
        };
        let mut cookies = RecordingCookieJar::new();

        let locale = LocaleResolver::new(database.as_ref()).at(now).resolve(
            &self.request,
            session.as_mut(),
            &mut cookies,
            &mut settings,
        )?;
        let language = LanguagePack::open(&config.paths.language, &locale.directory, &locale.filename)?;

        if let Some(tracking) = self.request.query(TRACKING_KEY) {
            cookies.set_cookie(Cookie::new(
                TRACKING_KEY,
                tracking,
                now,
                TRACKING_COOKIE_TTL_SECS,
            ))?;
            debug!(tracking, "Issued tracking cookie");
        }

        let actions = ActionResolver::new(
            config.paths.application.clone(),
            config.paths.controller_extension.clone(),
        );
        let front = DefaultFrontController::new(actions, self.controllers);

        info!(
            environment = %self.environment,
            store_id = store.store_id,
            locale = %locale.code,
            elapsed_ms = timer.elapsed_ms(),
            "Bootstrap complete"
        );

        Ok(Harness {
            root: self.root,
            environment: self.environment,
            config,
            database,
            session,
            cookies,
            verifier: self
                .verifier
                .unwrap_or_else(|| Box::new(Argon2PasswordVerifier::new())),
            request: self.request,
            store,
            settings,
            url,
            response,
            locale,
            language,
            front,
            models: self.models,
            registry: ServiceRegistry::new(),
        })
    }
}

/// A bootstrapped application
///
/// Owns the results of the pipeline; accessors hand out borrows.
pub struct Harness {
    root: PathBuf,
    environment: Environment,
    config: InstallConfig,
    database: Box<dyn CatalogDatabase>,
    session: Box<dyn SessionStore>,
    cookies: RecordingCookieJar,
    verifier: Box<dyn PasswordVerifier>,
    request: RequestContext,
    store: StoreResolution,
    settings: Settings,
    url: Url,
    response: Response,
    locale: LocaleInfo,
    language: LanguagePack,
    front: DefaultFrontController,
    models: ModelLoader,
    registry: ServiceRegistry,
}

impl Harness {
    // ========================================================================
    // Bootstrapped state
    // ========================================================================

    /// Install root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Environment tag
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Resolved installation configuration
    pub fn config(&self) -> &InstallConfig {
        &self.config
    }

    /// Catalog database
    pub fn database(&self) -> &dyn CatalogDatabase {
        self.database.as_ref()
    }

    /// Session
    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Session, mutably
    pub fn session_mut(&mut self) -> &mut dyn SessionStore {
        self.session.as_mut()
    }

    /// Cookies issued since bootstrap
    pub fn cookies(&self) -> &RecordingCookieJar {
        &self.cookies
    }

    /// Simulated request
    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    /// Simulated request, mutably
    pub fn request_mut(&mut self) -> &mut RequestContext {
        &mut self.request
    }

    /// Store resolution
    pub fn store(&self) -> &StoreResolution {
        &self.store
    }

    /// Resolved store id
    pub fn store_id(&self) -> i64 {
        self.store.store_id
    }

    /// Merged settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Merged settings, mutably
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Link builder
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Response collected from dispatched actions
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Response, mutably
    pub fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }

    /// Output written by the last dispatched action
    pub fn output(&self) -> &str {
        self.response.output()
    }

    /// Resolved locale
    pub fn locale(&self) -> &LocaleInfo {
        &self.locale
    }

    /// Translation strings of the resolved locale
    pub fn language(&self) -> &LanguagePack {
        &self.language
    }

    /// Translation strings, mutably (to load more files)
    pub fn language_mut(&mut self) -> &mut LanguagePack {
        &mut self.language
    }

    /// Front controller
    pub fn front(&self) -> &DefaultFrontController {
        &self.front
    }

    /// Loaded models and test-supplied services
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Registry, mutably
    pub fn registry_mut(&mut self) -> &mut ServiceRegistry {
        &mut self.registry
    }

    /// View handed to controller and model factories
    pub fn scope(&self) -> ControllerScope<'_> {
        ControllerScope {
            settings: &self.settings,
            request: &self.request,
            locale: &self.locale,
        }
    }

    // ========================================================================
    // Controllers and models
    // ========================================================================

    /// Instantiate the controller for `route` without running it
    ///
    /// Fails with not-found when the controller file does not exist.
    pub fn load_controller_by_route(&self, route: &str) -> Result<Box<dyn Controller>> {
        let action = Action::parse(route)?;
        self.front
            .catalog()
            .load(self.front.resolver(), &action, &self.scope())
    }

    /// Dispatch `route` through the front controller
    ///
    /// An empty route dispatches `common/home`; an unresolvable one falls back
    /// to `error/not_found`.
    pub fn dispatch_action(&mut self, route: &str) -> Result<&Response> {
        let route = if route.trim().is_empty() {
            DEFAULT_ROUTE
        } else {
            route
        };
        let action = Action::parse(route)?;
        let fallback = Action::parse(NOT_FOUND_ROUTE)?;
        let scope = ControllerScope {
            settings: &self.settings,
            request: &self.request,
            locale: &self.locale,
        };

        let ran = self
            .front
            .dispatch(&action, &fallback, &scope, &mut self.response)?;
        debug!(requested = %action, ran = %ran, "Dispatch finished");
        Ok(&self.response)
    }

    /// Load the model at `route` and return it
    pub fn load_model_by_route<T: Any + Send + Sync>(&mut self, route: &str) -> Result<Arc<T>> {
        let scope = ControllerScope {
            settings: &self.settings,
            request: &self.request,
            locale: &self.locale,
        };
        self.models
            .model::<T>(route, self.front.resolver(), &scope, &mut self.registry)
    }

    // ========================================================================
    // Customer helpers
    // ========================================================================

    /// Log a customer in from the loopback address
    ///
    /// `override_password` skips the password check.
    pub fn customer_login(
        &mut self,
        email: &str,
        password: &str,
        override_password: bool,
    ) -> Result<Customer> {
        self.request.set_remote_addr(LOOPBACK_ADDR);
        CustomerSession::new(self.database.as_ref(), self.verifier.as_ref()).login(
            self.session.as_mut(),
            email,
            password,
            override_password,
        )
    }

    /// Log the current customer out, if any
    pub fn customer_logout(&mut self) -> Result<bool> {
        CustomerSession::logout(self.session.as_mut())
    }

    /// Whether a customer is logged in
    pub fn is_customer_logged(&self) -> bool {
        CustomerSession::is_logged(self.session.as_ref())
    }
}

//! Configuration loader
//!
//! Locates the installation's `config.toml` from the install root and the
//! environment tag, then layers it with Figment:
//!
//! 1. Default values from `InstallConfig::default()`
//! 2. The TOML file (required)
//! 3. Environment variables with prefix (e.g. `SHOPBOOT_DATABASE__DRIVER`)

use crate::config::InstallConfig;
use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, CONFIG_FILENAME};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use shopboot_domain::error::{Error, Result};
use shopboot_domain::value_objects::Environment;
use shopboot_providers::database::validate_table_prefix;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Install root
    root: PathBuf,

    /// Which half of the application is bootstrapped
    environment: Environment,
}

impl ConfigLoader {
    /// Loader for the installation at `root`
    pub fn new(root: impl Into<PathBuf>, environment: Environment) -> Self {
        Self {
            root: root.into(),
            environment,
        }
    }

    /// Install root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Environment tag
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Configuration file for the current root and environment
    ///
    /// `admin` reads `<root>/config.toml`, `catalog` reads
    /// `<root>/admin/config.toml`.
    pub fn config_path(&self) -> PathBuf {
        self.environment
            .config_dir(&self.root)
            .join(CONFIG_FILENAME)
    }

    /// Load, validate and resolve the configuration
    ///
    /// Fails with a setup error when the configuration file does not exist.
    pub fn load(&self) -> Result<InstallConfig> {
        let config_path = self.config_path();
        if !config_path.is_file() {
            log_config_loaded(&config_path, false);
            return Err(Error::setup(format!(
                "The application has to be installed first ({} not found)",
                config_path.display()
            )));
        }

        let config: InstallConfig = Figment::new()
            .merge(Serialized::defaults(InstallConfig::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split(CONFIG_ENV_SEPARATOR))
            .extract()
            .config_context("Failed to extract configuration")?;
        log_config_loaded(&config_path, true);

        validate_install_config(&config)?;

        Ok(config.resolved(&self.root))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &InstallConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).io_context("Failed to create config directory")?;
        }
        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }
}

/// Validate installation configuration
pub fn validate_install_config(config: &InstallConfig) -> Result<()> {
    validate_server_url("http_server", &config.http_server)?;
    validate_server_url("https_server", &config.https_server)?;
    validate_table_prefix(&config.database.prefix)?;
    if config.paths.controller_extension.is_empty() {
        return Err(Error::configuration("Controller extension cannot be empty"));
    }
    Ok(())
}

fn validate_server_url(name: &str, url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(Error::configuration(format!("{name} cannot be empty")));
    }
    if !url.ends_with('/') {
        return Err(Error::configuration(format!(
            "{name} must end with '/' (got '{url}')"
        )));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: InstallConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: InstallConfig::default(),
        }
    }

    /// Set both base URLs
    pub fn with_servers(mut self, http: impl Into<String>, https: impl Into<String>) -> Self {
        self.config.http_server = http.into();
        self.config.https_server = https.into();
        self
    }

    /// Set paths configuration
    pub fn with_paths(mut self, paths: crate::config::PathsConfig) -> Self {
        self.config.paths = paths;
        self
    }

    /// Set database configuration
    pub fn with_database(mut self, database: crate::config::DatabaseConfig) -> Self {
        self.config.database = database;
        self
    }

    /// Set session configuration
    pub fn with_session(mut self, session: crate::config::SessionConfig) -> Self {
        self.config.session = session;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration, relative paths unresolved
    pub fn build(self) -> InstallConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

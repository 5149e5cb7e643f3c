//! shopboot - Entry Point
//!
//! Bootstraps an installation for one simulated request and prints what the
//! pipeline resolved as JSON. Useful for checking a checkout's configuration
//! before writing tests against it.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use shopboot_domain::value_objects::{Environment, RequestContext};
use shopboot_infrastructure::{ConfigLoader, HarnessBuilder};
use std::path::PathBuf;

/// Command line interface for shopboot
#[derive(Parser, Debug)]
#[command(name = "shopboot")]
#[command(about = "Bootstrap a storefront installation and report the resolved state")]
#[command(version)]
pub struct Cli {
    /// Install root
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Environment to bootstrap (`admin` or `catalog`)
    #[arg(short, long, default_value = "catalog")]
    pub env: String,

    /// Simulated `HTTP_HOST`
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Simulated `PHP_SELF`
    #[arg(long, default_value = "/index.php")]
    pub script: String,

    /// Simulated `Accept-Language` header
    #[arg(long)]
    pub accept_language: Option<String>,

    /// Request cookie as NAME=VALUE (repeatable)
    #[arg(long = "cookie", value_parser = parse_pair)]
    pub cookies: Vec<(String, String)>,

    /// Query parameter as NAME=VALUE (repeatable)
    #[arg(long = "query", value_parser = parse_pair)]
    pub query: Vec<(String, String)>,

    /// Override the configured log level
    #[arg(long)]
    pub log_level: Option<String>,
}

fn parse_pair(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

impl Cli {
    fn request(&self) -> RequestContext {
        let mut request = RequestContext::new(&self.host, &self.script);
        if let Some(header) = &self.accept_language {
            request = request.with_accept_language(header);
        }
        for (name, value) in &self.cookies {
            request = request.with_cookie(name, value);
        }
        for (name, value) in &self.query {
            request = request.with_query(name, value);
        }
        request
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let environment: Environment = cli.env.parse()?;

    let mut config = ConfigLoader::new(&cli.root, environment)
        .load()
        .with_context(|| format!("Failed to load configuration under {}", cli.root.display()))?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }

    let harness = HarnessBuilder::new(&cli.root)
        .with_environment(environment)
        .with_config(config)
        .with_request(cli.request())
        .bootstrap()
        .context("Bootstrap failed")?;

    let summary = json!({
        "environment": harness.environment().as_str(),
        "store": {
            "id": harness.store_id(),
            "candidate_url": harness.store().candidate_url,
        },
        "url": {
            "base": harness.url().base(),
            "secure": harness.url().secure_base(),
        },
        "locale": harness.locale(),
        "language_strings": harness.language().len(),
        "settings": harness.settings().len(),
        "session_id": harness.session().id(),
        "cookies": harness.cookies().issued(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

// src/lib.rs

pub mod auth;
pub mod browser;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod cookies;
pub mod downloader;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod models;
pub mod symbols;
pub mod ui;
pub mod utils;
pub mod workflows;

use crate::{
    browser::WebDriverBrowser,
    cli::Cli,
    client::DocumentClient,
    config::{
        AppConfig,
        credentials::{ensure_password, load_credentials, resolve_credentials_path},
        sites::load_sites,
    },
    downloader::DocumentDownloader,
    error::AppResult,
    models::Credentials,
};
use anyhow::Context;
use log::{debug, info};
use std::{path::PathBuf, sync::Arc};

/// Everything a run needs besides the browser and the site list.
pub struct RunContext {
    pub config: Arc<AppConfig>,
    pub credentials: Credentials,
    pub downloader: DocumentDownloader,
    /// Download files even when they already exist.
    pub overwrite: bool,
    pub export_cookies: Option<PathBuf>,
}

/// Library entry point used by `main.rs`.
pub async fn run_from_cli(args: Arc<Cli>) -> AppResult<()> {
    debug!("CLI args: {:?}", args);
    let base_dir = dunce::canonicalize(&args.base_dir)
        .with_context(|| format!("base directory '{}' does not exist or is not accessible", args.base_dir.display()))?;

    let sites_path = utils::resolve_under(&base_dir, &args.sites);
    let sites = load_sites(&sites_path, &base_dir)?;
    if sites.is_empty() {
        ui::warn(&format!("{} lists no sites, nothing to do.", sites_path.display()));
        return Ok(());
    }
    ui::info(&format!("Loaded {} site(s) from {}.", sites.len(), sites_path.display()));

    let (credentials_path, source) = resolve_credentials_path(args.credentials.as_deref(), &base_dir);
    info!("reading credentials from {} ({})", credentials_path.display(), source);
    let credentials = ensure_password(load_credentials(&credentials_path)?)?;
    ui::info(&format!("Credentials for '{}' loaded from {}.", credentials.username, source));

    let config = Arc::new(AppConfig::new(&args)?);
    debug!("effective config: {:?}", config);

    let context = RunContext {
        downloader: DocumentDownloader::new(DocumentClient::new(&config)?),
        config: config.clone(),
        credentials,
        overwrite: args.force,
        export_cookies: args
            .export_cookies
            .as_ref()
            .map(|path| utils::resolve_under(&base_dir, path)),
    };

    let browser = WebDriverBrowser::launch(&config.webdriver_url, config.headless).await?;
    ui::ok(&format!("Browser session opened via {}.", config.webdriver_url));

    let summary = workflows::run(&browser, &sites, &context).await?;
    workflows::print_summary(&summary);
    Ok(())
}

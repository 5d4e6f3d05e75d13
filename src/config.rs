// src/config.rs

pub mod credentials;
pub mod sites;

use crate::{
    browser::WaitPolicy,
    cli::Cli,
    constants,
    error::{AppError, AppResult},
};
use anyhow::{Context, anyhow};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkConfig {
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}

/// How long to poll a page before working with whatever has rendered.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WaitConfig {
    pub poll_interval_ms: Option<u64>,
    pub page_timeout_secs: Option<u64>,
    pub login_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExternalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webdriver_url: Option<String>,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub wait: WaitConfig,
}

impl ExternalConfig {
    pub(crate) fn default_app_config() -> Self {
        Self {
            webdriver_url: Some(constants::DEFAULT_WEBDRIVER_URL.into()),
            network: NetworkConfig {
                connect_timeout_secs: Some(10),
                timeout_secs: Some(120),
            },
            // The page and login timeouts match the delays the portals historically needed
            wait: WaitConfig {
                poll_interval_ms: Some(250),
                page_timeout_secs: Some(3),
                login_timeout_secs: Some(2),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webdriver_url: String,
    pub headless: bool,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub page_wait: WaitPolicy,
    pub login_wait: WaitPolicy,
}

impl AppConfig {
    pub fn new(args: &Cli) -> AppResult<Self> {
        let config_path = match &args.config {
            Some(path) => path.clone(),
            None => get_config_path()?,
        };
        let external_config = load_or_create_external_config(&config_path)?;
        Ok(Self::from_external(external_config, args))
    }

    pub fn from_external(external: ExternalConfig, args: &Cli) -> Self {
        let interval = Duration::from_millis(external.wait.poll_interval_ms.unwrap_or(250));
        Self {
            webdriver_url: args
                .webdriver
                .clone()
                .or(external.webdriver_url)
                .unwrap_or_else(|| constants::DEFAULT_WEBDRIVER_URL.into()),
            headless: !args.headed,
            user_agent: constants::USER_AGENT.into(),
            connect_timeout: Duration::from_secs(external.network.connect_timeout_secs.unwrap_or(10)),
            timeout: Duration::from_secs(external.network.timeout_secs.unwrap_or(120)),
            page_wait: WaitPolicy::new(
                interval,
                Duration::from_secs(external.wait.page_timeout_secs.unwrap_or(3)),
            ),
            login_wait: WaitPolicy::new(
                interval,
                Duration::from_secs(external.wait.login_timeout_secs.unwrap_or(2)),
            ),
        }
    }
}

#[cfg(feature = "testing")]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webdriver_url: constants::DEFAULT_WEBDRIVER_URL.to_string(),
            headless: true,
            user_agent: "test-agent/1.0".to_string(),
            connect_timeout: Duration::from_secs(5),
            timeout: Duration::from_secs(15),
            page_wait: WaitPolicy::new(Duration::from_millis(1), Duration::from_millis(50)),
            login_wait: WaitPolicy::new(Duration::from_millis(1), Duration::from_millis(50)),
        }
    }
}

pub(crate) fn get_config_path() -> AppResult<PathBuf> {
    let path = dirs::home_dir()
        .ok_or_else(|| AppError::Other(anyhow!("could not determine the home directory")))?
        .join(constants::CONFIG_DIR_NAME)
        .join(constants::CONFIG_FILE_NAME);
    Ok(path)
}

pub(crate) fn load_or_create_external_config(config_path: &Path) -> AppResult<ExternalConfig> {
    if config_path.is_file() {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("reading config file '{}' failed", config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing config file '{}' failed", config_path.display()))
            .map_err(AppError::from)
    } else {
        info!("config file {:?} not found, writing defaults", config_path);
        let config = ExternalConfig::default_app_config();

        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let json_content = serde_json::to_string_pretty(&config)?;
        fs::write(config_path, json_content)?;

        Ok(config)
    }
}

// src/browser/webdriver.rs

use super::{Browser, Locator};
use crate::{error::AppResult, models::BrowserCookie};
use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;
use thirtyfour::prelude::*;

/// [`Browser`] backed by a W3C WebDriver server (geckodriver + Firefox).
pub struct WebDriverBrowser {
    driver: WebDriver,
}

impl WebDriverBrowser {
    pub async fn launch(server_url: &str, headless: bool) -> AppResult<Self> {
        info!("connecting to WebDriver at {} (headless={})", server_url, headless);
        let mut caps = DesiredCapabilities::firefox();
        if headless {
            caps.set_headless()?;
        }
        let driver = WebDriver::new(server_url, caps).await?;
        Ok(Self { driver })
    }
}

/// Wire shape of a WebDriver cookie; optional flags come back as `null` from some drivers.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCookie {
    name: String,
    value: String,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    secure: Option<bool>,
    #[serde(default)]
    http_only: Option<bool>,
    #[serde(default)]
    expiry: Option<i64>,
}

impl From<RawCookie> for BrowserCookie {
    fn from(raw: RawCookie) -> Self {
        Self {
            domain: raw.domain.unwrap_or_default(),
            http_only: raw.http_only.unwrap_or(false),
            path: raw.path.unwrap_or_else(|| "/".to_string()),
            secure: raw.secure.unwrap_or(false),
            expiry: raw.expiry,
            name: raw.name,
            value: raw.value,
        }
    }
}

#[async_trait]
impl Browser for WebDriverBrowser {
    type Element = WebElement;

    async fn navigate(&self, url: &str) -> AppResult<()> {
        debug!("navigate: {}", url);
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn page_source(&self) -> AppResult<String> {
        Ok(self.driver.source().await?)
    }

    async fn cookies(&self) -> AppResult<Vec<BrowserCookie>> {
        let cookies = self.driver.get_all_cookies().await?;
        debug!("browser reported {} cookie(s)", cookies.len());
        cookies
            .into_iter()
            .map(|c| -> AppResult<BrowserCookie> {
                let raw: RawCookie = serde_json::from_value(serde_json::to_value(c)?)?;
                Ok(raw.into())
            })
            .collect()
    }

    async fn find(&self, locator: Locator<'_>) -> AppResult<Self::Element> {
        let by = match locator {
            Locator::Id(id) => By::Id(id),
            Locator::Css(css) => By::Css(css),
        };
        Ok(self.driver.find(by).await?)
    }

    async fn send_keys(&self, element: &Self::Element, text: &str) -> AppResult<()> {
        element.send_keys(text).await?;
        Ok(())
    }

    async fn submit(&self, element: &Self::Element) -> AppResult<()> {
        element.click().await?;
        Ok(())
    }

    async fn close(&self) -> AppResult<()> {
        info!("closing browser session");
        self.driver.clone().quit().await?;
        Ok(())
    }
}

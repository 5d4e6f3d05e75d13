// src/client.rs

use crate::{config::AppConfig, error::*, models::SessionCredential};
use log::debug;
use reqwest::{Response, StatusCode, header};
use url::Url;

/// Plain HTTP side of the tool: carries the cookie bridged out of the browser.
///
/// No retry policy is installed; a failed request surfaces immediately.
#[derive(Clone)]
pub struct DocumentClient {
    pub client: reqwest::Client,
}

impl DocumentClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` authenticated solely by `session`. The body is left unread for streaming.
    pub async fn get_with_session(&self, url: &Url, session: &SessionCredential) -> AppResult<Response> {
        debug!("GET {} (cookie {})", url, session.cookie_name);
        let res = self
            .client
            .get(url.clone())
            .header(header::COOKIE, session.header_value())
            .send()
            .await?;
        if matches!(res.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Err(AppError::SessionRejected { url: url.to_string() });
        }
        Ok(res.error_for_status()?)
    }
}

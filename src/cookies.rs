// src/cookies.rs

//! Bridges the browser's authenticated session into the plain HTTP client.

use crate::{
    browser::Browser,
    error::{AppError, AppResult},
    models::{BrowserCookie, SessionCredential},
};
use log::{debug, info};
use std::{fs, path::Path};

/// Looks up `name` in the browser's current cookie jar (exact, case-sensitive match).
pub async fn get_cookie_value<B>(browser: &B, name: &str) -> AppResult<SessionCredential>
where
    B: Browser + ?Sized,
{
    let cookies = browser.cookies().await?;
    debug!(
        "looking for cookie '{}' among {} cookie(s): {:?}",
        name,
        cookies.len(),
        cookies.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
    );
    cookies
        .into_iter()
        .find(|c| c.name == name)
        .map(|c| SessionCredential {
            cookie_name: c.name,
            cookie_value: c.value,
        })
        .ok_or_else(|| AppError::CookieNotFound { name: name.to_string() })
}

fn flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// One export line: `domain, httpOnly, path, secure, expiry, name, value`, tab separated.
///
/// Session cookies have no expiry and are written with `0`.
pub fn format_cookie_line(cookie: &BrowserCookie) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
        cookie.domain,
        flag(cookie.http_only),
        cookie.path,
        flag(cookie.secure),
        cookie.expiry.unwrap_or(0),
        cookie.name,
        cookie.value
    )
}

/// Writes all cookies to `path`, replacing whatever was there.
pub fn export_cookies(cookies: &[BrowserCookie], path: &Path) -> AppResult<()> {
    let content: String = cookies.iter().map(format_cookie_line).collect();
    fs::write(path, content)?;
    info!("exported {} cookie(s) to {}", cookies.len(), path.display());
    Ok(())
}

// src/browser/mod.rs

//! The browser as an opaque capability.
//!
//! Authentication and link extraction only ever talk to [`Browser`], so the
//! WebDriver backend can be swapped for any other automation driver (or a
//! scripted fake in tests) without touching them.

pub mod wait;
mod webdriver;

#[cfg(any(test, feature = "testing"))]
pub mod fake;

pub use wait::{Readiness, WaitPolicy};
pub use webdriver::WebDriverBrowser;

use crate::{error::AppResult, models::BrowserCookie};
use async_trait::async_trait;
use std::fmt;

/// How to find an element on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    Id(&'a str),
    Css(&'a str),
}

impl fmt::Display for Locator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "#{}", id),
            Locator::Css(css) => f.write_str(css),
        }
    }
}

#[async_trait]
pub trait Browser: Send + Sync {
    /// Handle to an element located on the current page.
    type Element: Send + Sync;

    async fn navigate(&self, url: &str) -> AppResult<()>;

    /// The DOM as currently rendered, scripts included.
    async fn page_source(&self) -> AppResult<String>;

    /// Cookie jar for the current domain.
    async fn cookies(&self) -> AppResult<Vec<BrowserCookie>>;

    async fn find(&self, locator: Locator<'_>) -> AppResult<Self::Element>;

    async fn send_keys(&self, element: &Self::Element, text: &str) -> AppResult<()>;

    /// Activates a submit control.
    async fn submit(&self, element: &Self::Element) -> AppResult<()>;

    async fn close(&self) -> AppResult<()>;
}

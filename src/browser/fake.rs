// src/browser/fake.rs

//! Scripted [`Browser`] used by the test suites.

use super::{Browser, Locator};
use crate::{
    error::{AppError, AppResult},
    models::BrowserCookie,
};
use anyhow::anyhow;
use async_trait::async_trait;
use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

/// Serves canned page sources per URL and records every interaction.
///
/// A page registered with several sources yields them one per `page_source`
/// call and then keeps repeating the last, which is how slow client-side
/// rendering is simulated.
#[derive(Default)]
pub struct FakeBrowser {
    pages: Mutex<HashMap<String, VecDeque<String>>>,
    cookies: Vec<BrowserCookie>,
    current: Mutex<Option<String>>,
    submit_target: Option<String>,
    missing: Vec<String>,
    events: Mutex<Vec<String>>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, source: &str) -> Self {
        self.with_page_sequence(url, vec![source])
    }

    pub fn with_page_sequence(self, url: &str, sources: Vec<&str>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), sources.into_iter().map(String::from).collect());
        self
    }

    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.push(BrowserCookie {
            domain: "example.test".into(),
            path: "/".into(),
            name: name.into(),
            value: value.into(),
            ..Default::default()
        });
        self
    }

    pub fn with_full_cookie(mut self, cookie: BrowserCookie) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Page the browser lands on after a form submit.
    pub fn redirect_on_submit(mut self, url: &str) -> Self {
        self.submit_target = Some(url.to_string());
        self
    }

    /// Makes `find` fail for the given element id.
    pub fn without_element(mut self, id: &str) -> Self {
        self.missing.push(id.to_string());
        self
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| e.strip_prefix("navigate ").map(String::from))
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        self.events().iter().any(|e| e == "close")
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl Browser for FakeBrowser {
    type Element = String;

    async fn navigate(&self, url: &str) -> AppResult<()> {
        self.record(format!("navigate {}", url));
        *self.current.lock().unwrap() = Some(url.to_string());
        Ok(())
    }

    async fn page_source(&self) -> AppResult<String> {
        let current = self.current.lock().unwrap().clone();
        let Some(url) = current else {
            return Ok(String::new());
        };
        let mut pages = self.pages.lock().unwrap();
        let source = match pages.get_mut(&url) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
            Some(queue) => queue.front().cloned().unwrap_or_default(),
            None => String::new(),
        };
        Ok(source)
    }

    async fn cookies(&self) -> AppResult<Vec<BrowserCookie>> {
        Ok(self.cookies.clone())
    }

    async fn find(&self, locator: Locator<'_>) -> AppResult<Self::Element> {
        let key = match locator {
            Locator::Id(id) | Locator::Css(id) => id.to_string(),
        };
        if self.missing.contains(&key) {
            return Err(AppError::Other(anyhow!("no such element: {}", locator)));
        }
        Ok(key)
    }

    async fn send_keys(&self, element: &Self::Element, text: &str) -> AppResult<()> {
        self.record(format!("keys {} {}", element, text));
        Ok(())
    }

    async fn submit(&self, element: &Self::Element) -> AppResult<()> {
        self.record(format!("submit {}", element));
        if let Some(target) = &self.submit_target {
            *self.current.lock().unwrap() = Some(target.clone());
        }
        Ok(())
    }

    async fn close(&self) -> AppResult<()> {
        self.record("close".to_string());
        Ok(())
    }
}

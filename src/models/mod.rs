// src/models/mod.rs

mod portal;

pub use portal::{LoginForm, Portal};

use crate::symbols;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// One course page and the directory its documents go to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDescriptor {
    pub url: String,
    pub dir: PathBuf,
}

impl SiteDescriptor {
    pub fn portal(&self) -> Option<Portal> {
        Portal::detect(&self.url)
    }
}

/// Login data shared by both portals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    /// Prompted for when absent from the file.
    #[serde(default)]
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

/// A document discovered on a course page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub remote_link: Url,
    pub filename: String,
}

impl LinkRecord {
    /// Splits records into the parallel `links`/`filenames` lists the downloader takes.
    pub fn unzip(records: Vec<LinkRecord>) -> (Vec<Url>, Vec<String>) {
        records
            .into_iter()
            .map(|r| (r.remote_link, r.filename))
            .unzip()
    }
}

/// The single cookie forwarded from the browser to the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredential {
    pub cookie_name: String,
    pub cookie_value: String,
}

impl SessionCredential {
    pub fn header_value(&self) -> String {
        format!("{}={}", self.cookie_name, self.cookie_value)
    }
}

/// A cookie as reported by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserCookie {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub expiry: Option<i64>,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Skipped,
    Written { bytes: u64 },
}

impl DownloadOutcome {
    pub fn get_display_info(&self) -> (&'static ColoredString, fn(ColoredString) -> ColoredString) {
        match self {
            DownloadOutcome::Skipped => (&symbols::SKIP, |s| s.dimmed()),
            DownloadOutcome::Written { .. } => (&symbols::OK, |s| s.green()),
        }
    }
}

/// Per-site tally of what the downloader did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub written: usize,
    pub skipped: usize,
    pub bytes: u64,
}

impl DownloadReport {
    pub fn record(&mut self, outcome: DownloadOutcome) {
        match outcome {
            DownloadOutcome::Skipped => self.skipped += 1,
            DownloadOutcome::Written { bytes } => {
                self.written += 1;
                self.bytes += bytes;
            }
        }
    }

    pub fn merge(&mut self, other: &DownloadReport) {
        self.written += other.written;
        self.skipped += other.skipped;
        self.bytes += other.bytes;
    }

    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}

// src/extractor/moodle.rs

use super::{LinkExtractor, resolve_href};
use crate::{
    constants::moodle,
    models::{LinkRecord, Portal},
    utils,
};
use log::debug;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(moodle::ITEM_SELECTOR).unwrap());
static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static ORIGIN: LazyLock<Url> = LazyLock::new(|| Url::parse(Portal::Moodle.origin()).unwrap());

/// Moodle course pages: every file resource is an `li.modtype_resource`.
pub struct MoodleExtractor {
    origin: Url,
}

impl Default for MoodleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodleExtractor {
    pub fn new() -> Self {
        Self::with_origin(ORIGIN.clone())
    }

    pub fn with_origin(origin: Url) -> Self {
        Self { origin }
    }
}

/// Visible item text, lower-cased, whitespace runs as `_`, the `_file` marker
/// Moodle appends for screen readers removed, `.pdf` appended.
pub fn moodle_filename(item_text: &str) -> Option<String> {
    let stem = utils::replace_whitespace(&item_text.to_lowercase(), "_").replace(moodle::FILE_MARKER, "");
    (!stem.is_empty()).then(|| format!("{}{}", stem, moodle::FILE_EXTENSION))
}

impl LinkExtractor for MoodleExtractor {
    fn portal(&self) -> Portal {
        Portal::Moodle
    }

    fn parse_links(&self, html: &str) -> Vec<LinkRecord> {
        let document = Html::parse_document(html);
        document
            .select(&ITEM_SELECTOR)
            .filter_map(|item| {
                let href = item.select(&ANCHOR_SELECTOR).find_map(|a| a.value().attr("href"))?;
                let remote_link = resolve_href(&self.origin, href)?;
                let filename = moodle_filename(&item.text().collect::<String>())?;
                debug!("Moodle resource: '{}' @ '{}'", filename, remote_link);
                Some(LinkRecord { remote_link, filename })
            })
            .collect()
    }
}

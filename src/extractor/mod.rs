// src/extractor/mod.rs

pub mod moodle;
pub mod reader;

use crate::{
    browser::{Browser, WaitPolicy, wait},
    error::*,
    models::{LinkRecord, Portal},
};
use log::{debug, info, warn};
use url::Url;

/// Turns a rendered course page into the documents it links to.
pub trait LinkExtractor: Send + Sync {
    fn portal(&self) -> Portal;

    /// All document links on the page, in document order.
    fn parse_links(&self, html: &str) -> Vec<LinkRecord>;

    /// Whether the page has rendered at least one document link yet.
    fn has_links(&self, html: &str) -> bool {
        !self.parse_links(html).is_empty()
    }
}

pub fn for_portal(portal: Portal) -> Box<dyn LinkExtractor> {
    match portal {
        Portal::Moodle => {
            debug!("creating MoodleExtractor");
            Box::new(moodle::MoodleExtractor::new())
        }
        Portal::Reader => {
            debug!("creating ReaderExtractor");
            Box::new(reader::ReaderExtractor::new())
        }
    }
}

/// Opens `url`, waits for the document list to render and parses it.
///
/// A page that never shows a document link within the wait policy is parsed
/// as-is; an empty course page is not an error.
pub async fn extract<B>(
    browser: &B,
    extractor: &dyn LinkExtractor,
    url: &str,
    wait_policy: &WaitPolicy,
) -> AppResult<Vec<LinkRecord>>
where
    B: Browser + ?Sized,
{
    browser.navigate(url).await?;
    let readiness = wait::wait_for_source(browser, wait_policy, |html| extractor.has_links(html)).await?;
    if !readiness.ready {
        warn!(
            "no {} document links on {} after {:?} (empty page or still rendering)",
            extractor.portal(),
            url,
            readiness.waited
        );
    }
    let records = extractor.parse_links(&readiness.source);
    info!("found {} document link(s) on {}", records.len(), url);
    Ok(records)
}

/// Resolves an `href` against the portal origin, logging and dropping ones that do not parse.
fn resolve_href(origin: &Url, href: &str) -> Option<Url> {
    match origin.join(href.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("skipping unparsable link '{}': {}", href, e);
            None
        }
    }
}

// src/extractor/reader.rs

use super::{LinkExtractor, resolve_href};
use crate::{
    constants::reader,
    models::{LinkRecord, Portal},
    utils,
};
use log::{debug, warn};
use percent_encoding::percent_decode_str;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(reader::LINK_SELECTOR).unwrap());
static ORIGIN: LazyLock<Url> = LazyLock::new(|| Url::parse(Portal::Reader.origin()).unwrap());

/// SharePoint document libraries: every file is an `a.ms-listlink.ms-draggable`.
pub struct ReaderExtractor {
    origin: Url,
}

impl Default for ReaderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderExtractor {
    pub fn new() -> Self {
        Self::with_origin(ORIGIN.clone())
    }

    pub fn with_origin(origin: Url) -> Self {
        Self { origin }
    }
}

/// Last path segment, percent-decoded, lower-cased, whitespace removed.
pub fn reader_filename(link: &Url) -> Option<String> {
    let segment = link.path_segments()?.next_back()?;
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    let name = utils::replace_whitespace(&decoded.to_lowercase(), "");
    (!name.is_empty()).then_some(name)
}

impl LinkExtractor for ReaderExtractor {
    fn portal(&self) -> Portal {
        Portal::Reader
    }

    fn parse_links(&self, html: &str) -> Vec<LinkRecord> {
        let document = Html::parse_document(html);
        document
            .select(&LINK_SELECTOR)
            .filter_map(|anchor| {
                let href = anchor.value().attr("href")?;
                let remote_link = resolve_href(&self.origin, href)?;
                let Some(filename) = reader_filename(&remote_link) else {
                    warn!("no filename in Reader link '{}', skipping", remote_link);
                    return None;
                };
                debug!("Reader document: '{}' @ '{}'", filename, remote_link);
                Some(LinkRecord { remote_link, filename })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY: &str = r#"
        <html><body><table>
          <tr><td>
            <a class="ms-listlink ms-draggable" href="/WiSe2024/Algebra/Shared Documents/Week 1.pdf">Week 1</a>
          </td></tr>
          <tr><td>
            <a class="ms-listlink ms-draggable" href="/WiSe2024/Algebra/Shared%20Documents/Exercise%20Sheet%2002.PDF">Exercise Sheet 02</a>
          </td></tr>
          <tr><td>
            <a class="ms-listlink" href="/WiSe2024/Algebra/Forms/AllItems.aspx">Not draggable, not a document</a>
          </td></tr>
          <tr><td>
            <a class="ms-draggable ms-listlink extra" href="https://reader.uni-mainz.de/Other/Notes.txt">Notes</a>
          </td></tr>
        </table></body></html>"#;

    #[test]
    fn test_parse_links_in_document_order() {
        let records = ReaderExtractor::new().parse_links(LIBRARY);
        let filenames: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(filenames, vec!["week1.pdf", "exercisesheet02.pdf", "notes.txt"]);

        assert_eq!(
            records[0].remote_link.as_str(),
            "https://reader.uni-mainz.de/WiSe2024/Algebra/Shared%20Documents/Week%201.pdf"
        );
        assert_eq!(records[2].remote_link.as_str(), "https://reader.uni-mainz.de/Other/Notes.txt");
    }

    #[test]
    fn test_filename_derivation() {
        let url = Url::parse("https://reader.uni-mainz.de/x/Shared Documents/Week 1.pdf").unwrap();
        assert_eq!(reader_filename(&url).as_deref(), Some("week1.pdf"));

        // Escaped and literal spaces name the same file
        let escaped = Url::parse("https://reader.uni-mainz.de/x/Week%201.pdf").unwrap();
        assert_eq!(reader_filename(&escaped).as_deref(), Some("week1.pdf"));

        let dir = Url::parse("https://reader.uni-mainz.de/x/").unwrap();
        assert_eq!(reader_filename(&dir), None);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a class="ms-listlink ms-draggable">broken</a>"#;
        assert!(ReaderExtractor::new().parse_links(html).is_empty());
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert!(ReaderExtractor::new().parse_links("<html></html>").is_empty());
        assert!(!ReaderExtractor::new().has_links("<html></html>"));
    }

    #[test]
    fn test_custom_origin() {
        let extractor = ReaderExtractor::with_origin(Url::parse("http://127.0.0.1:8080").unwrap());
        let records = extractor.parse_links(LIBRARY);
        assert!(records[0].remote_link.as_str().starts_with("http://127.0.0.1:8080/WiSe2024/"));
    }
}

//! Sitemap XML parser
//!
//! Streams the document with `quick-xml` and classifies it by its root
//! element:
//! - `<sitemapindex>` yields a [`SitemapDocument::Index`] of `<sitemap>` records
//! - `<urlset>` yields a [`SitemapDocument::Leaf`] of `<url>` records
//!
//! Element names are matched on their local part, so prefixed documents
//! (`<sm:urlset>`) parse the same way. Records without a `<loc>` are skipped.

use crate::sitemap::types::{IndexEntry, SitemapDocument, SitemapEntry};
use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    UrlSet,
    SitemapIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Loc,
    LastMod,
    ChangeFreq,
    Priority,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"loc" => Some(Self::Loc),
            b"lastmod" => Some(Self::LastMod),
            b"changefreq" => Some(Self::ChangeFreq),
            b"priority" => Some(Self::Priority),
            _ => None,
        }
    }
}

/// Parser state while walking the event stream
#[derive(Default)]
struct State {
    root: Option<Root>,
    depth: usize,
    record: Option<SitemapEntry>,
    field: Option<Field>,
    text: String,
    urls: Vec<SitemapEntry>,
    sitemaps: Vec<IndexEntry>,
}

impl State {
    fn start(&mut self, name: &[u8]) -> Result<(), String> {
        self.depth += 1;
        match self.depth {
            1 => self.open_root(name)?,
            2 if self.is_record(name) => self.record = Some(SitemapEntry::default()),
            3 if self.record.is_some() => {
                self.field = Field::from_name(name);
                self.text.clear();
            }
            _ => {}
        }
        Ok(())
    }

    fn end(&mut self) {
        match self.depth {
            3 => self.close_field(),
            2 => self.close_record(),
            _ => {}
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn open_root(&mut self, name: &[u8]) -> Result<(), String> {
        if self.root.is_some() {
            return Ok(());
        }
        self.root = match name {
            b"urlset" => Some(Root::UrlSet),
            b"sitemapindex" => Some(Root::SitemapIndex),
            other => {
                return Err(format!(
                    "unexpected root element <{}>, expected <urlset> or <sitemapindex>",
                    String::from_utf8_lossy(other)
                ))
            }
        };
        Ok(())
    }

    fn is_record(&self, name: &[u8]) -> bool {
        matches!(
            (self.root, name),
            (Some(Root::UrlSet), b"url") | (Some(Root::SitemapIndex), b"sitemap")
        )
    }

    fn push_text(&mut self, text: &str) {
        if self.field.is_some() {
            self.text.push_str(text);
        }
    }

    fn close_field(&mut self) {
        let (Some(field), Some(record)) = (self.field.take(), self.record.as_mut()) else {
            return;
        };
        let value = self.text.trim();
        if value.is_empty() {
            return;
        }
        let value = Some(value.to_string());
        match field {
            Field::Loc => record.location = value.unwrap_or_default(),
            Field::LastMod => record.last_modified = value,
            Field::ChangeFreq => record.change_frequency = value,
            Field::Priority => record.priority = value,
        }
    }

    fn close_record(&mut self) {
        let Some(record) = self.record.take() else {
            return;
        };
        if record.location.is_empty() {
            return;
        }
        match self.root {
            Some(Root::UrlSet) => self.urls.push(record),
            Some(Root::SitemapIndex) => self.sitemaps.push(IndexEntry {
                location: record.location,
                last_modified: record.last_modified,
            }),
            None => {}
        }
    }

    fn finish(self) -> Result<SitemapDocument, String> {
        if self.depth > 0 {
            return Err("unexpected end of document: unclosed elements".to_string());
        }
        match self.root {
            Some(Root::UrlSet) => Ok(SitemapDocument::Leaf(self.urls)),
            Some(Root::SitemapIndex) => Ok(SitemapDocument::Index(self.sitemaps)),
            None => Err("document has no root element".to_string()),
        }
    }
}

/// Parses sitemap XML text into a classified document
///
/// # Returns
///
/// * `Ok(SitemapDocument)` - A leaf sitemap or a sitemap index
/// * `Err(String)` - The XML is malformed or is not a sitemap document
///
/// # Example
///
/// ```
/// use sitemap_frontier::sitemap::{parse_sitemap, SitemapDocument};
///
/// let xml = r#"<sitemapindex>
///   <sitemap><loc>https://example.com/a.xml</loc></sitemap>
///   <sitemap><loc>https://example.com/b.xml</loc></sitemap>
/// </sitemapindex>"#;
/// let doc = parse_sitemap(xml).unwrap();
/// assert!(doc.is_index());
/// assert_eq!(doc.child_urls(), vec!["https://example.com/a.xml", "https://example.com/b.xml"]);
/// ```
pub fn parse_sitemap(xml: &str) -> Result<SitemapDocument, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut state = State::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => state.start(e.local_name().as_ref())?,
            Ok(Event::Empty(e)) => {
                state.start(e.local_name().as_ref())?;
                state.end();
            }
            Ok(Event::End(_)) => state.end(),
            Ok(Event::Text(e)) => match e.unescape() {
                Ok(text) => state.push_text(&text),
                Err(_) => state.push_text(&String::from_utf8_lossy(&e)),
            },
            Ok(Event::CData(e)) => state.push_text(&String::from_utf8_lossy(&e.into_inner())),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!(
                    "XML error at position {}: {}",
                    reader.buffer_position(),
                    e
                ))
            }
            _ => {}
        }
    }

    state.finish()
}

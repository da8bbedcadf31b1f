use serde::Serialize;

/// One `<url>` record from a leaf sitemap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    #[serde(rename = "loc")]
    pub location: String,

    #[serde(rename = "lastmod", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    #[serde(rename = "changefreq", skip_serializing_if = "Option::is_none")]
    pub change_frequency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// One `<sitemap>` record from a sitemap index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexEntry {
    pub location: String,
    pub last_modified: Option<String>,
}

impl From<IndexEntry> for SitemapEntry {
    fn from(entry: IndexEntry) -> Self {
        Self {
            location: entry.location,
            last_modified: entry.last_modified,
            change_frequency: None,
            priority: None,
        }
    }
}

/// A parsed sitemap document, classified once at parse time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapDocument {
    /// A `<urlset>` listing page URLs
    Leaf(Vec<SitemapEntry>),
    /// A `<sitemapindex>` listing child sitemap documents
    Index(Vec<IndexEntry>),
}

impl SitemapDocument {
    pub fn kind(&self) -> SitemapKind {
        match self {
            Self::Leaf(_) => SitemapKind::Sitemap,
            Self::Index(_) => SitemapKind::SitemapIndex,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Returns the child sitemap URLs of an index, in document order
    ///
    /// Leaf documents have no children.
    pub fn child_urls(&self) -> Vec<&str> {
        match self {
            Self::Leaf(_) => Vec::new(),
            Self::Index(entries) => entries.iter().map(|e| e.location.as_str()).collect(),
        }
    }

    /// Number of records in the document
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf(entries) => entries.len(),
            Self::Index(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the document into listing rows
    ///
    /// Index records become rows carrying only `loc` and `lastmod`.
    pub fn into_entries(self) -> Vec<SitemapEntry> {
        match self {
            Self::Leaf(entries) => entries,
            Self::Index(entries) => entries.into_iter().map(SitemapEntry::from).collect(),
        }
    }
}

/// Whether a document is a leaf sitemap or a sitemap index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SitemapKind {
    Sitemap,
    SitemapIndex,
}

/// Which probing strategy found a sitemap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoverySource {
    RobotsTxt,
    StandardLocation,
    SitemapIndex,
}

/// A sitemap document found during discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapReference {
    pub url: String,

    #[serde(rename = "type")]
    pub kind: SitemapKind,

    pub discovered_from: DiscoverySource,
}

/// A document left out of a traversal because it could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub url: String,
    pub reason: String,
}

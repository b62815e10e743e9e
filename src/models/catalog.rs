//! Catalog data model
//!
//! Types for the entities an origin reports: channels, movies and
//! series with their season/episode trees, plus the routes used to
//! page through category listings.

use serde::Deserialize;

/// Stream type tag the playlist consumer can open directly.
const MANIFEST_KIND: &str = "m3u8";

/// A live origin base address chosen for the current run.
///
/// Returned by value from the resolver and threaded as a parameter
/// into every subsequent fetch; never stored as process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub base_url: String,
}

impl Origin {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Media type of a catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Live,
    Movie,
    Series,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Live => write!(f, "live"),
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Series => write!(f, "series"),
        }
    }
}

/// A stream reference as the origin reports it.
///
/// Either field may be absent; such sources never qualify as playable.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StreamSource {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl StreamSource {
    /// A source is playable only when its declared type is a streaming
    /// manifest and a delivery URL is present and non-empty.
    pub fn is_playable(&self) -> bool {
        let kind_ok = self
            .kind
            .as_deref()
            .map(|k| k.eq_ignore_ascii_case(MANIFEST_KIND))
            .unwrap_or(false);
        let url_ok = self.url.as_deref().map(|u| !u.is_empty()).unwrap_or(false);
        kind_ok && url_ok
    }
}

/// One channel, movie or series as returned by an origin.
///
/// The id is origin-scoped and not guaranteed unique across category
/// listings; uniqueness is asserted by the deduplicator at merge time,
/// never per page.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sources: Vec<StreamSource>,
    /// Labels of the category listings this item was collected under.
    /// Filled in by the collector, not by the origin.
    #[serde(skip)]
    pub labels: Vec<String>,
}

impl CatalogItem {
    /// First source that passes the playable filter, in list order.
    pub fn first_playable(&self) -> Option<&StreamSource> {
        self.sources.iter().find(|s| s.is_playable())
    }

    /// All playable sources, in list order.
    pub fn playable_sources(&self) -> impl Iterator<Item = &StreamSource> {
        self.sources.iter().filter(|s| s.is_playable())
    }
}

/// A season of one series, owning its episode list.
#[derive(Debug, Clone, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// One episode, owned by exactly one season.
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sources: Vec<StreamSource>,
}

impl Episode {
    /// First source that passes the playable filter, in list order.
    pub fn first_playable(&self) -> Option<&StreamSource> {
        self.sources.iter().find(|s| s.is_playable())
    }
}

/// Per-series resolution result.
///
/// Zero seasons when the episode fetch failed or came back empty.
#[derive(Debug, Clone)]
pub struct SeriesTree {
    pub series: CatalogItem,
    pub seasons: Vec<Season>,
}

/// Deduplicated harvest output handed to the assembler.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub channels: Vec<CatalogItem>,
    pub movies: Vec<CatalogItem>,
    pub series: Vec<SeriesTree>,
}

/// One category listing to page through.
#[derive(Debug, Clone)]
pub struct CatalogRoute {
    pub kind: MediaKind,
    pub category_id: String,
    pub label: String,
}

impl CatalogRoute {
    pub fn new(kind: MediaKind, category_id: &str, label: &str) -> Self {
        Self {
            kind,
            category_id: category_id.to_string(),
            label: label.to_string(),
        }
    }

    /// API path for one page of this listing. The trailing key segment
    /// is appended by the client.
    pub fn page_path(&self, page: u32) -> String {
        match self.kind {
            MediaKind::Live => {
                format!("/api/channel/by/filtres/{}/0/{}", self.category_id, page)
            }
            MediaKind::Movie => {
                format!("/api/movie/by/filtres/{}/created/{}", self.category_id, page)
            }
            MediaKind::Series => {
                format!("/api/serie/by/filtres/{}/created/{}", self.category_id, page)
            }
        }
    }
}

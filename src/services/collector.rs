//! Paginated catalog collection
//!
//! Walks a catalog route page by page, starting at page 0, until the
//! first missing, non-list or empty page. Termination is data-driven;
//! no maximum page count is enforced. A transient fetch failure ends
//! the walk the same way exhaustion does, but the two cases stay
//! distinguishable in the walk result.

use crate::models::{CatalogItem, CatalogRoute, Origin};
use crate::services::api::{ApiClient, FetchError};
use tracing::debug;

/// Why a page walk stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEnd {
    /// The origin served an empty page: end of catalog.
    Exhausted,
    /// A fetch failed mid-walk; the collected items may undercount the
    /// catalog.
    FetchFailed,
}

/// Result of walking one catalog route to its end
#[derive(Debug)]
pub struct PageWalk {
    pub items: Vec<CatalogItem>,
    pub ended_by: PageEnd,
}

/// Collect every item of one catalog route.
///
/// Each collected item is tagged with the route label so the
/// deduplicator can union labels across overlapping listings. Items
/// without playable sources are retained; they still matter for
/// episode resolution and metadata.
pub async fn collect(api: &ApiClient, origin: &Origin, route: &CatalogRoute) -> PageWalk {
    let mut items: Vec<CatalogItem> = Vec::new();
    let mut page: u32 = 0;

    let ended_by = loop {
        match api.fetch_items(origin, &route.page_path(page)).await {
            Ok(page_items) if page_items.is_empty() => break PageEnd::Exhausted,
            Ok(page_items) => {
                for mut item in page_items {
                    item.labels.push(route.label.clone());
                    items.push(item);
                }
            }
            Err(FetchError::Empty) => break PageEnd::Exhausted,
            Err(e) => {
                debug!("{}: page {} ended the walk: {}", route.label, page, e);
                break PageEnd::FetchFailed;
            }
        }
        page += 1;
    };

    debug!(
        "{}: {} items over {} pages, ended {:?}",
        route.label,
        items.len(),
        page,
        ended_by
    );

    PageWalk { items, ended_by }
}

//! Per-series episode resolution
//!
//! Fetches each series' full season/episode tree in a single call,
//! fanned out with its own pool size: series counts run to the
//! hundreds where category counts stay at a handful.

use crate::models::{CatalogItem, Origin, SeriesTree};
use crate::services::api::ApiClient;
use futures::{stream, StreamExt};
use tracing::warn;

/// Resolve the season/episode tree of every series.
///
/// The input is already deduplicated, so each series is queried
/// exactly once. A failed or empty response yields zero seasons for
/// that series and never aborts sibling resolutions.
pub async fn resolve_all(
    api: &ApiClient,
    origin: &Origin,
    series: Vec<CatalogItem>,
    pool_size: usize,
) -> Vec<SeriesTree> {
    stream::iter(series)
        .map(|series_item| async move {
            let seasons = match series_item.id {
                Some(id) => match api.fetch_seasons(origin, id).await {
                    Ok(seasons) => seasons,
                    Err(e) => {
                        warn!(
                            "episode fetch failed for {}: {}",
                            series_item.title.as_deref().unwrap_or("?"),
                            e
                        );
                        Vec::new()
                    }
                },
                None => Vec::new(),
            };
            SeriesTree {
                series: series_item,
                seasons,
            }
        })
        .buffer_unordered(pool_size.max(1))
        .collect()
        .await
}

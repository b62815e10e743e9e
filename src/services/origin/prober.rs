//! Content-level origin liveness probe

use crate::models::{CatalogRoute, MediaKind, Origin};
use crate::services::api::ApiClient;
use tracing::debug;

/// The probe identifies itself as the stock mobile client.
const PROBE_USER_AGENT: &str = "okhttp/4.12.0";

/// Catalog path known to be non-empty on any live origin.
fn probe_path() -> String {
    CatalogRoute::new(MediaKind::Live, "0", "probe").page_path(0)
}

/// Probe one candidate origin.
///
/// Liveness is a content-level property, not a transport-level one: an
/// HTTP success whose body is an empty or malformed entity list is
/// reported as not working, so a responding-but-empty decoy is never
/// selected.
pub async fn probe(api: &ApiClient, candidate: &Origin) -> bool {
    match api
        .fetch_items_as(candidate, &probe_path(), PROBE_USER_AGENT)
        .await
    {
        Ok(items) if !items.is_empty() => true,
        Ok(_) => {
            debug!("probe: {} serves an empty catalog", candidate.base_url);
            false
        }
        Err(e) => {
            debug!("probe: {} failed: {}", candidate.base_url, e);
            false
        }
    }
}

//! Category fan-out
//!
//! Runs the paginated collector concurrently across a fixed route set
//! with bounded parallelism. Routes are independent: one route's
//! exhaustion or failure never blocks or cancels a sibling.

use crate::models::{CatalogRoute, Origin};
use crate::services::api::ApiClient;
use crate::services::collector::{self, PageWalk};
use futures::{stream, StreamExt};

/// Collect all routes, merged by route label.
///
/// Ordering within a route follows page order; ordering across routes
/// is not guaranteed. Deduplication across labels is the caller's job.
pub async fn collect_all(
    api: &ApiClient,
    origin: &Origin,
    routes: Vec<CatalogRoute>,
    pool_size: usize,
) -> Vec<(String, PageWalk)> {
    stream::iter(routes)
        .map(|route| async move {
            let walk = collector::collect(api, origin, &route).await;
            (route.label, walk)
        })
        .buffer_unordered(pool_size.max(1))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client() -> ApiClient {
        ApiClient::new("test-agent", "http://referer.test/", "KEY", 5_000)
    }

    #[tokio::test]
    async fn test_one_failing_route_never_affects_its_siblings() {
        let server = MockServer::start().await;
        let good = CatalogRoute::new(MediaKind::Movie, "3", "Komedi");
        let bad = CatalogRoute::new(MediaKind::Movie, "8", "Korku");

        Mock::given(method("GET"))
            .and(path(format!("{}/KEY", good.page_path(0))))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 11, "title": "Film", "sources": []}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{}/KEY", good.page_path(1))))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;
        // Every page of the bad route fails.
        Mock::given(method("GET"))
            .and(path(format!("{}/KEY", bad.page_path(0))))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let walks = collect_all(
            &test_client(),
            &Origin::new(&server.uri()),
            vec![good, bad],
            2,
        )
        .await;

        let komedi = walks.iter().find(|(label, _)| label == "Komedi").unwrap();
        let korku = walks.iter().find(|(label, _)| label == "Korku").unwrap();
        assert_eq!(komedi.1.items.len(), 1);
        assert!(korku.1.items.is_empty());
    }
}

//! Origin resolution
//!
//! Origins are ephemeral mirrors. The resolver builds an ordered
//! candidate list (the preferred dynamically-discovered address, then
//! an enumerable templated fallback range) and returns the first one
//! that passes the content-level probe.

use crate::config::Config;
use crate::models::Origin;
use crate::services::api::ApiClient;
use crate::services::origin::{discovery, prober};
use tracing::{debug, info};

/// Fatal harvest errors
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    /// No candidate origin passed the probe. The whole run aborts;
    /// there is no partial-origin mode.
    #[error("no working origin available")]
    NoOriginAvailable,
}

/// Ordered candidate list: the preferred address first (when present),
/// then the templated fallback hosts in ascending suffix order.
pub fn candidate_origins(
    preferred: Option<String>,
    template: &str,
    low: u32,
    high: u32,
) -> Vec<Origin> {
    let mut candidates = Vec::new();
    if let Some(address) = preferred {
        candidates.push(Origin::new(&address));
    }
    for n in low..=high {
        candidates.push(Origin::new(&template.replace("{n}", &n.to_string())));
    }
    candidates
}

/// First candidate accepted by the probe wins; the remainder are never
/// probed.
pub async fn resolve_from(
    api: &ApiClient,
    candidates: Vec<Origin>,
) -> Result<Origin, HarvestError> {
    for candidate in candidates {
        debug!("probing origin candidate: {}", candidate.base_url);
        if prober::probe(api, &candidate).await {
            info!("resolved working origin: {}", candidate.base_url);
            return Ok(candidate);
        }
    }
    Err(HarvestError::NoOriginAvailable)
}

/// Resolve a working origin for this run.
///
/// An explicitly configured preferred origin takes precedence over
/// dynamic discovery; it is still probed like any other candidate.
pub async fn resolve(api: &ApiClient, config: &Config) -> Result<Origin, HarvestError> {
    let preferred = match &config.preferred_origin {
        Some(address) => Some(address.clone()),
        None => discovery::discover_preferred(api, &config.discovery_url).await,
    };
    let candidates = candidate_origins(
        preferred,
        &config.fallback_host_template,
        config.fallback_range_low,
        config.fallback_range_high,
    );
    resolve_from(api, candidates).await
}

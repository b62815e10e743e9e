//! Entity deduplication
//!
//! Collapses entities seen under multiple category listings to one
//! canonical record keyed by origin-assigned identifier.

use crate::models::CatalogItem;
use std::collections::HashMap;
use tracing::debug;

/// Deduplicate items by identifier.
///
/// First-seen-wins for attribute values; category labels are the
/// union across duplicates, in first-seen order. An item without an
/// identifier cannot be keyed and is dropped.
pub fn dedup(items: impl IntoIterator<Item = CatalogItem>) -> Vec<CatalogItem> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut canonical: Vec<CatalogItem> = Vec::new();
    let mut dropped = 0usize;

    for item in items {
        let Some(id) = item.id else {
            dropped += 1;
            continue;
        };
        match index.get(&id) {
            Some(&at) => {
                for label in item.labels {
                    if !canonical[at].labels.contains(&label) {
                        canonical[at].labels.push(label);
                    }
                }
            }
            None => {
                index.insert(id, canonical.len());
                canonical.push(item);
            }
        }
    }

    if dropped > 0 {
        debug!("dropped {} items without an identifier", dropped);
    }
    canonical
}

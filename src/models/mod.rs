//! Data model shared across the harvester services

pub mod catalog;
pub mod playlist;

// Re-export commonly used items
pub use catalog::{
    Catalog, CatalogItem, CatalogRoute, Episode, MediaKind, Origin, Season, SeriesTree,
    StreamSource,
};
pub use playlist::PlaylistEntry;

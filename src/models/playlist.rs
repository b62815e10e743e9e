//! Playlist emission types

/// The emission unit: one resolved stream source plus the
/// presentational attributes derived from its owning entity chain.
///
/// Created only after a source passes the playable filter; never
/// mutated; written once, in first-discovered order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub title: String,
    pub logo_url: Option<String>,
    pub group_label: String,
    pub stream_url: String,
}

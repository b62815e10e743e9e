//! Playlist assembly
//!
//! Walks the deduplicated catalog (channels, then movies, then series
//! episodes) and lazily emits one playlist entry per resolved stream
//! source, applying the naming and grouping rules. Entries stream out
//! in first-discovered order; the full entry list is never buffered.

use crate::models::{Catalog, CatalogItem, PlaylistEntry};
use crate::services::numbering::title_number;
use async_stream::stream;
use futures::Stream;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Trailing parenthetical annotation on channel titles
    static ref TRAILING_PAREN: Regex = Regex::new(r"\s*\([^)]*\)\s*$").unwrap();
}

/// Channel display title: the origin title without any trailing
/// parenthetical annotation.
fn channel_title(raw: &str) -> String {
    TRAILING_PAREN.replace(raw, "").trim().to_string()
}

/// Title usable for emission, or None when the item is malformed.
fn usable_title(item: &CatalogItem) -> Option<&str> {
    match item.title.as_deref() {
        Some(t) if !t.trim().is_empty() => Some(t),
        _ => None,
    }
}

/// Lazily produce the playlist entries for a whole catalog.
///
/// - Channel: one entry per playable source; group label is the
///   channel's own category.
/// - Movie: at most one entry, first playable source wins; group label
///   `Movies;<genre>`.
/// - Episode: at most one entry per episode, first playable source
///   wins; title `<series> S<nn>E<nn>`; group label
///   `Series;<series title>`. The hierarchical label format is a
///   pass-through convention of the playlist consumer.
pub fn assemble(catalog: Catalog) -> impl Stream<Item = PlaylistEntry> {
    stream! {
        for channel in &catalog.channels {
            let Some(raw) = usable_title(channel) else { continue };
            let title = channel_title(raw);
            let group = channel.labels.first().cloned().unwrap_or_default();
            for source in channel.playable_sources() {
                yield PlaylistEntry {
                    title: title.clone(),
                    logo_url: channel.image.clone(),
                    group_label: group.clone(),
                    stream_url: source.url.clone().unwrap_or_default(),
                };
            }
        }

        for movie in &catalog.movies {
            let Some(title) = usable_title(movie) else { continue };
            let Some(source) = movie.first_playable() else { continue };
            let genre = movie.labels.first().cloned().unwrap_or_default();
            yield PlaylistEntry {
                title: title.to_string(),
                logo_url: movie.image.clone(),
                group_label: format!("Movies;{}", genre),
                stream_url: source.url.clone().unwrap_or_default(),
            };
        }

        for tree in &catalog.series {
            let Some(series_title) = usable_title(&tree.series) else { continue };
            let group = format!("Series;{}", series_title);
            for season in &tree.seasons {
                let season_number = title_number(season.title.as_deref().unwrap_or(""));
                for episode in &season.episodes {
                    let Some(source) = episode.first_playable() else { continue };
                    let episode_number =
                        title_number(episode.title.as_deref().unwrap_or(""));
                    yield PlaylistEntry {
                        title: format!(
                            "{} S{:02}E{:02}",
                            series_title, season_number, episode_number
                        ),
                        logo_url: tree.series.image.clone(),
                        group_label: group.clone(),
                        stream_url: source.url.clone().unwrap_or_default(),
                    };
                }
            }
        }
    }
}

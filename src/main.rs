mod config;
mod models;
mod services;
mod sink;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::BufWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::models::{Catalog, CatalogItem};
use crate::services::api::ApiClient;
use crate::services::collector::PageWalk;
use crate::services::{assembler, dedup, episodes, origin, scheduler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rectv_harvest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!("Starting harvest v{}", env!("CARGO_PKG_VERSION"));

    let api = ApiClient::from_config(&config);

    // A fatal resolution failure aborts before any fan-out starts and
    // before any output exists.
    let origin = origin::resolve(&api, &config)
        .await
        .context("origin resolution failed")?;
    tracing::info!("Active origin: {}", origin.base_url);

    tracing::info!("Collecting live channels");
    let channel_walks = scheduler::collect_all(
        &api,
        &origin,
        config::channel_routes(),
        config.pool_size_categories,
    )
    .await;

    tracing::info!("Collecting movies");
    let movie_walks = scheduler::collect_all(
        &api,
        &origin,
        config::movie_routes(),
        config.pool_size_categories,
    )
    .await;

    tracing::info!("Collecting series");
    let series_walks = scheduler::collect_all(
        &api,
        &origin,
        config::series_routes(),
        config.pool_size_categories,
    )
    .await;

    let channels = dedup::dedup(walk_items(channel_walks));
    let movies = dedup::dedup(walk_items(movie_walks));
    let series = dedup::dedup(walk_items(series_walks));
    tracing::info!(
        "Collected {} channels, {} movies, {} series",
        channels.len(),
        movies.len(),
        series.len()
    );

    tracing::info!("Resolving episodes for {} series", series.len());
    let series = episodes::resolve_all(&api, &origin, series, config.pool_size_series).await;

    let catalog = Catalog {
        channels,
        movies,
        series,
    };
    let entries = assembler::assemble(catalog);

    let file = File::create(&config.output_file)
        .await
        .with_context(|| format!("cannot create {}", config.output_file))?;
    let mut writer = BufWriter::new(file);
    let written =
        sink::write_playlist(&mut writer, entries, &config.user_agent, &config.referer).await?;

    tracing::info!("Wrote {} playlist entries to {}", written, config.output_file);
    Ok(())
}

/// Flatten fan-out results into one item sequence for deduplication.
fn walk_items(walks: Vec<(String, PageWalk)>) -> impl Iterator<Item = CatalogItem> {
    walks.into_iter().flat_map(|(_, walk)| walk.items)
}

// Main entry point - Load the route once, then follow the playback clock
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::sync_service::{PlaybackSync, ELEVATION_SERIES};
use crate::application::widgets::Page;
use crate::infrastructure::config::load_config;
use crate::infrastructure::headless_chart::HeadlessChart;
use crate::infrastructure::headless_map::HeadlessMap;
use crate::infrastructure::json_source::route_source;
use crate::infrastructure::simulated_clock::SimulatedClock;
use crate::presentation::console_page::ConsolePage;
use crate::presentation::replay::run_replay;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut page = ConsolePage::new();

    // Load configuration
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            page.show_error(&format!("{:#}", e));
            return Err(e);
        }
    };
    let location = config.source.location()?;

    // Load route data (the only asynchronous step; gates all widget setup)
    let source = route_source(&location);
    tracing::info!("Loading route data from {}", source.location());
    let route = match source
        .load()
        .await
        .with_context(|| format!("Failed to load route data from {}", source.location()))
    {
        Ok(route) => route,
        Err(e) => {
            page.show_error(&format!("{:#}", e));
            return Err(e);
        }
    };

    let duration = route.duration();
    tracing::info!(
        "Loaded '{}' with {} samples covering {:.1}s of video",
        route.title,
        route.series.len(),
        duration
    );

    // Set up widgets
    let mut sync = PlaybackSync::initialize(
        route,
        HeadlessMap::new(config.map.zoom),
        HeadlessChart::new(),
        &mut page,
        &config.sync_style(),
    );

    // Follow playback
    let playback = &config.playback;
    let end = playback.end.unwrap_or(duration).max(playback.start);
    let clock = SimulatedClock::new(playback.start, end, playback.rate, playback.tick());
    let summary = run_replay(&mut sync, &clock).await;

    if sync.route_is_empty() {
        tracing::warn!("Route has no video points; the marker never moved");
    }

    let map = sync.map();
    let cursor = sync
        .chart()
        .plot_line(&config.chart.plot_line_id)
        .map(|line| line.value);
    let elevation_points = sync.chart().series(ELEVATION_SERIES).map_or(0, |s| s.len());
    println!(
        "{}: {} route points ({}), {} elevation points",
        page.title().unwrap_or("untitled"),
        map.path().len(),
        map.path_style().map_or("not drawn", |style| style.color.as_str()),
        elevation_points
    );
    if let Some(marker) = map.marker() {
        println!(
            "Marker at {:.6},{:.6} (sample {:?}, cursor {:?}) after {} updates ({} skipped, {} pans)",
            marker.lat,
            marker.lng,
            sync.current_index(),
            cursor,
            summary.updates,
            summary.skipped,
            map.pan_count()
        );
    }
    if let Some(viewport) = map.viewport() {
        let center = viewport.center();
        println!("Viewport centered on {:.6},{:.6}", center.lat, center.lng);
    }

    Ok(())
}

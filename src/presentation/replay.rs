// Replay loop - Feeds playback clock updates into the sync service
use crate::application::playback_clock::PlaybackClock;
use crate::application::sync_service::{PlaybackSync, SyncOutcome};
use crate::application::widgets::{ChartWidget, MapWidget};
use futures::StreamExt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    pub updates: usize,
    pub moved: usize,
    pub skipped: usize,
    pub pans: usize,
}

/// Consume every time update of `clock`, one at a time, until the clock ends.
pub async fn run_replay<M, C>(sync: &mut PlaybackSync<M, C>, clock: &dyn PlaybackClock) -> ReplaySummary
where
    M: MapWidget,
    C: ChartWidget,
{
    let mut summary = ReplaySummary::default();
    let mut updates = clock.time_updates();

    while let Some(time) = updates.next().await {
        summary.updates += 1;
        match sync.on_time_update(time) {
            SyncOutcome::Moved { panned, .. } => {
                summary.moved += 1;
                if panned {
                    summary.pans += 1;
                }
            }
            SyncOutcome::Skipped => summary.skipped += 1,
        }
    }

    tracing::info!(
        "Replay finished: {} updates, {} moved, {} skipped, {} pans",
        summary.updates,
        summary.moved,
        summary.skipped,
        summary.pans
    );

    summary
}

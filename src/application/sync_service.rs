// Playback sync service - Keeps the map marker and chart cursor on the video position
use crate::application::widgets::{ChartWidget, CursorStyle, MapWidget, Page, SyncStyle};
use crate::domain::route::RouteData;

pub const ELEVATION_SERIES: &str = "Elevation";

/// What a single time update did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncOutcome {
    Moved { index: usize, panned: bool },
    Skipped,
}

pub struct PlaybackSync<M, C> {
    route: RouteData,
    map: M,
    chart: C,
    cursor: CursorStyle,
    current: Option<usize>,
}

impl<M: MapWidget, C: ChartWidget> PlaybackSync<M, C> {
    /// Set up the page and both widgets from a freshly loaded route.
    pub fn initialize(
        route: RouteData,
        mut map: M,
        mut chart: C,
        page: &mut dyn Page,
        style: &SyncStyle,
    ) -> Self {
        page.set_title(&route.title);

        map.fit_bounds(route.bounds);
        map.draw_path(&route.route_points, &style.path);

        let first = route.first_sample().copied();
        if let Some(sample) = first {
            map.set_marker_position(sample.position());
        }

        chart.render_series(ELEVATION_SERIES, &route.elevation_profile());
        chart.add_plot_line(style.cursor.at(first.map(|s| s.time).unwrap_or(0.0)));

        // Fit again once the chart has taken its share of the layout
        map.fit_bounds(route.bounds);

        tracing::info!(
            "Initialized '{}': {} route points, {} samples",
            route.title,
            route.route_points.len(),
            route.series.len()
        );

        Self {
            route,
            map,
            chart,
            cursor: style.cursor.clone(),
            current: first.map(|_| 0),
        }
    }

    /// Sample index for a playback position.
    ///
    /// Positions at or before the first sample select the first sample; the
    /// locator cannot match them because its intervals are open at the bottom.
    pub fn resolve_index(&self, query: f64) -> Option<usize> {
        let first = self.route.series.first()?;
        if query <= first.time {
            return Some(0);
        }
        self.route.series.locate(query)
    }

    /// Handle one time update from the playback clock.
    pub fn on_time_update(&mut self, query: f64) -> SyncOutcome {
        let Some(index) = self.resolve_index(query) else {
            tracing::debug!("No sample for playback time {}, keeping previous position", query);
            return SyncOutcome::Skipped;
        };
        let Some(sample) = self.route.series.get(index).copied() else {
            return SyncOutcome::Skipped;
        };

        let position = sample.position();
        self.map.set_marker_position(position);

        let panned = !self.map.is_point_visible(position);
        if panned {
            tracing::debug!("Marker left the viewport at {:?}, panning", position);
            self.map.pan_to(position);
        }

        self.chart.remove_plot_line(&self.cursor.id);
        self.chart.add_plot_line(self.cursor.at(sample.time));

        tracing::trace!("Playback {} -> sample {} at t={}", query, index, sample.time);
        self.current = Some(index);

        SyncOutcome::Moved { index, panned }
    }

    pub fn route_is_empty(&self) -> bool {
        self.route.series.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[cfg(test)]
    pub fn route(&self) -> &RouteData {
        &self.route
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }
}

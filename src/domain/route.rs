// Route domain model
use super::geo::{Bounds, LatLng};
use super::sample::{Sample, SampleSeries};

/// Everything the page needs about one recorded route, loaded once.
#[derive(Debug, Clone)]
pub struct RouteData {
    pub title: String,
    pub bounds: Bounds,
    pub route_points: Vec<LatLng>,
    pub series: SampleSeries,
}

impl RouteData {
    pub fn new(
        title: String,
        bounds: Bounds,
        route_points: Vec<LatLng>,
        series: SampleSeries,
    ) -> Self {
        Self {
            title,
            bounds,
            route_points,
            series,
        }
    }

    /// `(time, elevation)` pairs in playback order
    pub fn elevation_profile(&self) -> Vec<(f64, f64)> {
        self.series
            .as_slice()
            .iter()
            .map(|s| (s.time, s.elevation))
            .collect()
    }

    pub fn first_sample(&self) -> Option<&Sample> {
        self.series.first()
    }

    /// Playback time of the last sample, or zero for an empty route
    pub fn duration(&self) -> f64 {
        self.series.last().map(|s| s.time).unwrap_or(0.0)
    }
}

// web_info.json route sources (local file and HTTP)
use crate::application::route_source::RouteDataSource;
use crate::domain::geo::{Bounds, LatLng};
use crate::domain::route::RouteData;
use crate::domain::sample::{Sample, SampleSeries, SeriesError};
use crate::infrastructure::config::RouteLocation;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

// Column layout of a `video_points` row
const FRAME_COLUMN: usize = 0;
const TIME_COLUMN: usize = 1;
const LAT_COLUMN: usize = 2;
const LNG_COLUMN: usize = 3;
const ELEVATION_COLUMN: usize = 4;

#[derive(Debug, Deserialize)]
struct WebInfo {
    title: String,
    route_points: Vec<[f64; 2]>,
    bounds: WireBounds,
    video_points: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct WireBounds {
    southwest: WireLatLng,
    northeast: WireLatLng,
}

#[derive(Debug, Deserialize)]
struct WireLatLng {
    lat: f64,
    lng: f64,
}

impl From<WireLatLng> for LatLng {
    fn from(point: WireLatLng) -> Self {
        LatLng::new(point.lat, point.lng)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum WireFormatError {
    #[error("video point {row} has {len} columns, expected at least 5")]
    ShortRow { row: usize, len: usize },
    #[error("video point {row} column {column} is not a number")]
    NonNumeric { row: usize, column: usize },
    #[error("invalid video point series: {0}")]
    Series(#[from] SeriesError),
}

impl WebInfo {
    fn into_route(self) -> Result<RouteData, WireFormatError> {
        let samples = self
            .video_points
            .iter()
            .enumerate()
            .map(|(row, values)| parse_video_point(row, values))
            .collect::<Result<Vec<_>, _>>()?;
        let series = SampleSeries::new(samples)?;

        let route_points = self
            .route_points
            .into_iter()
            .map(|[lat, lng]| LatLng::new(lat, lng))
            .collect();
        let bounds = Bounds::new(self.bounds.southwest.into(), self.bounds.northeast.into());

        Ok(RouteData::new(self.title, bounds, route_points, series))
    }
}

fn parse_video_point(row: usize, values: &[serde_json::Value]) -> Result<Sample, WireFormatError> {
    if values.len() <= ELEVATION_COLUMN {
        return Err(WireFormatError::ShortRow {
            row,
            len: values.len(),
        });
    }

    let number = |column: usize| {
        values[column]
            .as_f64()
            .ok_or(WireFormatError::NonNumeric { row, column })
    };

    // The frame column is informational; fall back to the row number
    let frame = values[FRAME_COLUMN].as_f64().unwrap_or(row as f64);

    Ok(Sample::new(
        frame,
        number(TIME_COLUMN)?,
        number(LAT_COLUMN)?,
        number(LNG_COLUMN)?,
        number(ELEVATION_COLUMN)?,
    ))
}

/// Parse the contents of a `web_info.json` document.
pub fn parse_web_info(bytes: &[u8]) -> Result<RouteData> {
    let info: WebInfo = serde_json::from_slice(bytes).context("Failed to parse route data")?;
    Ok(info.into_route()?)
}

#[derive(Debug, Clone)]
pub struct FileRouteSource {
    path: PathBuf,
}

impl FileRouteSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl RouteDataSource for FileRouteSource {
    async fn load(&self) -> Result<RouteData> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let route = parse_web_info(&bytes)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        Ok(route)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct HttpRouteSource {
    url: String,
    client: reqwest::Client,
}

impl HttpRouteSource {
    pub fn new(url: String) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: String, client: reqwest::Client) -> Self {
        Self { url, client }
    }
}

#[async_trait]
impl RouteDataSource for HttpRouteSource {
    async fn load(&self) -> Result<RouteData> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request for route data")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Route data request failed with status {}: {}", status, body);
        }

        let info = response
            .json::<WebInfo>()
            .await
            .context("Failed to parse route data")?;

        Ok(info.into_route()?)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

pub fn route_source(location: &RouteLocation) -> Box<dyn RouteDataSource> {
    match location {
        RouteLocation::File(path) => Box::new(FileRouteSource::new(path.clone())),
        RouteLocation::Http(url) => Box::new(HttpRouteSource::new(url.clone())),
    }
}

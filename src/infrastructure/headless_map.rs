// In-memory map widget
use crate::application::widgets::{MapWidget, PathStyle};
use crate::domain::geo::{Bounds, LatLng};

/// Map widget without a renderer. Keeps the viewport, route line and marker
/// so the sync logic can run (and be checked) outside a browser.
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    zoom: u8,
    path: Vec<LatLng>,
    path_style: Option<PathStyle>,
    viewport: Option<Bounds>,
    marker: Option<LatLng>,
    pan_count: usize,
}

impl HeadlessMap {
    pub fn new(zoom: u8) -> Self {
        Self {
            zoom,
            path: Vec::new(),
            path_style: None,
            viewport: None,
            marker: None,
            pan_count: 0,
        }
    }

    /// Viewport of one web-mercator tile at the configured zoom, centered on `center`
    fn zoom_window(&self, center: LatLng) -> Bounds {
        let scale = 2f64.powi(i32::from(self.zoom));
        let (half_lat, half_lng) = (90.0 / scale, 180.0 / scale);
        Bounds::new(
            LatLng::new(center.lat - half_lat, center.lng - half_lng),
            LatLng::new(center.lat + half_lat, center.lng + half_lng),
        )
    }

    pub fn path(&self) -> &[LatLng] {
        &self.path
    }

    pub fn path_style(&self) -> Option<&PathStyle> {
        self.path_style.as_ref()
    }

    pub fn viewport(&self) -> Option<Bounds> {
        self.viewport
    }

    pub fn marker(&self) -> Option<LatLng> {
        self.marker
    }

    pub fn pan_count(&self) -> usize {
        self.pan_count
    }
}

impl MapWidget for HeadlessMap {
    fn draw_path(&mut self, path: &[LatLng], style: &PathStyle) {
        tracing::debug!("Drawing route line with {} points", path.len());
        self.path = path.to_vec();
        self.path_style = Some(style.clone());
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        tracing::debug!("Fitting viewport to {:?}", bounds);
        self.viewport = Some(bounds);
    }

    fn set_marker_position(&mut self, position: LatLng) {
        self.marker = Some(position);
    }

    fn is_point_visible(&self, point: LatLng) -> bool {
        self.viewport.is_some_and(|viewport| viewport.contains(point))
    }

    fn pan_to(&mut self, point: LatLng) {
        let viewport = self
            .viewport
            .map(|viewport| viewport.recentered_on(point))
            .unwrap_or_else(|| self.zoom_window(point));
        self.viewport = Some(viewport);
        self.pan_count += 1;
    }
}

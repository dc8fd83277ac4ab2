// Widget traits for the map, the elevation chart and the page
use crate::domain::geo::{Bounds, LatLng};

/// Stroke used for the route line
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub color: String,
    pub opacity: f64,
    pub weight: u32,
}

/// Vertical line on the chart's x axis
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLine {
    pub id: String,
    pub color: String,
    pub value: f64,
    pub width: u32,
}

/// Look of the playback cursor; the position is filled in per update.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorStyle {
    pub id: String,
    pub color: String,
    pub width: u32,
}

impl CursorStyle {
    pub fn at(&self, value: f64) -> PlotLine {
        PlotLine {
            id: self.id.clone(),
            color: self.color.clone(),
            value,
            width: self.width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncStyle {
    pub path: PathStyle,
    pub cursor: CursorStyle,
}

pub trait MapWidget {
    /// Draw the route line
    fn draw_path(&mut self, path: &[LatLng], style: &PathStyle);

    /// Fit the viewport to a rectangle
    fn fit_bounds(&mut self, bounds: Bounds);

    fn set_marker_position(&mut self, position: LatLng);

    /// Whether the point lies inside the current viewport
    fn is_point_visible(&self, point: LatLng) -> bool;

    /// Re-center the viewport on a point
    fn pan_to(&mut self, point: LatLng);
}

pub trait ChartWidget {
    /// Render a line series of `(x, y)` points
    fn render_series(&mut self, name: &str, points: &[(f64, f64)]);

    /// Remove a plot line by id; unknown ids are ignored
    fn remove_plot_line(&mut self, id: &str);

    fn add_plot_line(&mut self, line: PlotLine);
}

pub trait Page {
    fn set_title(&mut self, title: &str);

    /// Replace the view with a visible error state
    fn show_error(&mut self, message: &str);
}

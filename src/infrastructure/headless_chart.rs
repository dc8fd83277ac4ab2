// In-memory chart widget
use crate::application::widgets::{ChartWidget, PlotLine};

#[derive(Debug, Clone)]
pub struct RenderedSeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// Chart widget without a renderer; plot lines are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct HeadlessChart {
    series: Vec<RenderedSeries>,
    plot_lines: Vec<PlotLine>,
}

impl HeadlessChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self, name: &str) -> Option<&[(f64, f64)]> {
        self.series
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.points.as_slice())
    }

    /// First plot line with this id
    pub fn plot_line(&self, id: &str) -> Option<&PlotLine> {
        self.plot_lines.iter().find(|line| line.id == id)
    }

    #[cfg(test)]
    pub fn plot_lines(&self) -> &[PlotLine] {
        &self.plot_lines
    }
}

impl ChartWidget for HeadlessChart {
    fn render_series(&mut self, name: &str, points: &[(f64, f64)]) {
        tracing::debug!("Rendering series '{}' with {} points", name, points.len());
        self.series.retain(|s| s.name != name);
        self.series.push(RenderedSeries {
            name: name.to_string(),
            points: points.to_vec(),
        });
    }

    fn remove_plot_line(&mut self, id: &str) {
        self.plot_lines.retain(|line| line.id != id);
    }

    fn add_plot_line(&mut self, line: PlotLine) {
        self.plot_lines.push(line);
    }
}

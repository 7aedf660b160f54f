// File: crates/chartie-core/src/render/line.rs
// Summary: Line chart: one polyline per dataset rising from the plot baseline.

use crate::color::Color;
use crate::config::{ChartConfig, ChartData, Dataset, Options};
use crate::geometry::{Bounds, Point};
use crate::grid::point_positions;
use crate::scale::{compute_range, lerp, Range, ValueScale};
use crate::surface::{Path, Stroke, Surface};

use super::common::{
    cartesian_plot, draw_category_axis, draw_category_grid, draw_dataset_legend, draw_value_axis, draw_value_grid,
    Swatch,
};
use super::Renderer;

const POINT_RADIUS: f64 = 3.0;
const FILL_OPACITY: f64 = 0.3;
const DEFAULT_LINE_WIDTH: f64 = 2.0;

pub struct LineRenderer {
    data: ChartData,
    options: Options,
    range: Range,
}

impl LineRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        let values = config.data.datasets.iter().flat_map(|d| d.data.values());
        Self { data: config.data.clone(), options: config.options(), range: compute_range(values) }
    }

    pub fn value_range(&self) -> Range {
        self.range
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.data.datasets
    }

    fn line_color(dataset: &Dataset, index: usize, count: usize) -> Color {
        dataset.border_color.unwrap_or_else(|| crate::color::palette_color(index, count))
    }

    fn draw_lines(&self, surface: &mut dyn Surface, plot: Bounds, progress: f64) {
        let Some(labels) = self.data.labels() else { return };
        let xs = point_positions(plot.x, plot.width, labels.len());
        let scale = ValueScale::vertical(self.range, plot.y, plot.bottom());
        let baseline = plot.bottom();
        let datasets = &self.data.datasets;

        for (ds_index, dataset) in datasets.iter().enumerate() {
            let color = Self::line_color(dataset, ds_index, datasets.len());
            let tension = dataset.tension();
            let points: Vec<Point> = dataset
                .data
                .values()
                .into_iter()
                .zip(xs.iter())
                .map(|(v, &x)| Point::new(x, lerp(baseline, scale.to_px(v), progress)))
                .collect();
            let (Some(first), Some(last)) = (points.first(), points.last()) else { continue };

            if dataset.fill.unwrap_or(false) {
                let mut area = Path::new();
                area.move_to(first.x, baseline).line_to(first.x, first.y);
                trace_segments(&mut area, &points, tension);
                area.line_to(last.x, baseline).close();
                surface.fill_path(&area, color.fade(FILL_OPACITY));
            }

            let mut stroke = Path::new();
            stroke.move_to(first.x, first.y);
            trace_segments(&mut stroke, &points, tension);
            surface.stroke_path(&stroke, Stroke::new(color, line_width(dataset)));

            for p in &points {
                surface.fill_path(&Path::circle(*p, POINT_RADIUS), color);
            }
        }
    }
}

/// Stroke width of a dataset's line; zero or missing widths fall back to the default.
fn line_width(dataset: &Dataset) -> f64 {
    dataset.border_width.filter(|w| *w > 0.0).unwrap_or(DEFAULT_LINE_WIDTH)
}

/// Append segments from `points[0]` through the rest of `points`.
///
/// With `tension > 0` each segment is a cubic whose control points sit
/// `tension * dx` inside the segment at each endpoint's own height. Control
/// points depend only on the segment's two endpoints.
pub(crate) fn trace_segments(path: &mut Path, points: &[Point], tension: f64) {
    for pair in points.windows(2) {
        let (prev, p) = (pair[0], pair[1]);
        if tension > 0.0 {
            let dx = p.x - prev.x;
            path.bezier_curve_to(
                Point::new(prev.x + dx * tension, prev.y),
                Point::new(p.x - dx * tension, p.y),
                p,
            );
        } else {
            path.line_to(p.x, p.y);
        }
    }
}

impl Renderer for LineRenderer {
    fn draw(&self, surface: &mut dyn Surface, bounds: Bounds, progress: f64) {
        let datasets = &self.data.datasets;
        if datasets.is_empty() {
            return;
        }
        let legend = self.options.legend_displayed();
        let plot = cartesian_plot(bounds, legend);

        if legend {
            draw_dataset_legend(surface, bounds, &self.options, datasets, |i, d| {
                Swatch::Line(Self::line_color(d, i, datasets.len()))
            });
        }

        let labels = self.data.labels().unwrap_or_default();
        let xs = point_positions(plot.x, plot.width, labels.len());
        draw_value_grid(surface, plot, self.options.y_axis());
        draw_category_grid(surface, plot, self.options.x_axis(), &xs);

        draw_value_axis(surface, plot, self.range, self.options.y_axis());
        draw_category_axis(
            surface,
            plot,
            self.options.x_axis(),
            labels.iter().map(String::as_str).zip(xs.iter().copied()),
        );

        self.draw_lines(surface, plot, progress);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PathCommand;

    #[test]
    fn zero_border_width_uses_default_line_width() {
        let mut dataset = Dataset::values(vec![1.0]);
        assert_eq!(line_width(&dataset), DEFAULT_LINE_WIDTH);
        dataset.border_width = Some(0.0);
        assert_eq!(line_width(&dataset), DEFAULT_LINE_WIDTH);
        dataset.border_width = Some(3.0);
        assert_eq!(line_width(&dataset), 3.0);
    }

    #[test]
    fn straight_segments_without_tension() {
        let mut path = Path::new();
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 5.0), Point::new(20.0, 0.0)];
        path.move_to(0.0, 0.0);
        trace_segments(&mut path, &pts, 0.0);
        assert_eq!(path.commands().len(), 3);
        assert_eq!(path.commands()[2], PathCommand::LineTo(Point::new(20.0, 0.0)));
    }

    #[test]
    fn bezier_controls_hold_endpoint_heights() {
        let mut path = Path::new();
        let pts = [Point::new(0.0, 10.0), Point::new(100.0, 50.0)];
        trace_segments(&mut path, &pts, 0.4);
        match &path.commands()[0] {
            PathCommand::BezierTo { c1, c2, to } => {
                assert_eq!(*c1, Point::new(40.0, 10.0));
                assert_eq!(*c2, Point::new(60.0, 50.0));
                assert_eq!(*to, Point::new(100.0, 50.0));
            }
            other => panic!("expected bezier, got {other:?}"),
        }
    }
}

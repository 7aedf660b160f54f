// File: crates/chartie-core/src/render/scatter.rs
// Summary: Scatter chart: fixed point positions with radii growing in.

use crate::color::Color;
use crate::config::{ChartConfig, ChartData, FontOptions, Options};
use crate::geometry::{Bounds, Point};
use crate::grid::{division_lines, format_tick, value_ticks_ascending};
use crate::scale::{compute_range, lerp, Range, ValueScale};
use crate::surface::{Path, Stroke, Surface, TextAlign, TextBaseline, TextStyle};
use crate::types::VALUE_DIVISIONS;

use super::common::{
    cartesian_plot, draw_category_grid, draw_dataset_legend, draw_value_axis, draw_value_grid, item_colors,
    series_color, Swatch,
};
use super::Renderer;

pub const MAX_POINT_RADIUS: f64 = 4.0;

pub struct ScatterRenderer {
    data: ChartData,
    options: Options,
    range_x: Range,
    range_y: Range,
}

impl ScatterRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        let points = || config.data.datasets.iter().flat_map(|d| d.data.points().iter());
        Self {
            data: config.data.clone(),
            options: config.options(),
            range_x: compute_range(points().map(|p| p.x)),
            range_y: compute_range(points().map(|p| p.y)),
        }
    }

    pub fn ranges(&self) -> (Range, Range) {
        (self.range_x, self.range_y)
    }

    /// Bottom axis with numeric ticks at equal divisions of the x range.
    fn draw_x_axis(&self, surface: &mut dyn Surface, plot: Bounds) {
        let Some(axis) = self.options.x_axis().filter(|a| a.is_displayed()) else { return };
        let mut path = Path::new();
        path.move_to(plot.x, plot.bottom()).line_to(plot.right(), plot.bottom());
        surface.stroke_path(&path, Stroke::new(Color::rgb(0x33, 0x33, 0x33), 1.0));
        if !axis.ticks_displayed() {
            return;
        }
        let ticks = axis.ticks.as_ref();
        let style = TextStyle::new(
            FontOptions::resolve(ticks.and_then(|t| t.font.as_ref()), 10.0),
            ticks.and_then(|t| t.color).unwrap_or(Color::rgb(0x66, 0x66, 0x66)),
        )
        .aligned(TextAlign::Center, TextBaseline::Top);
        let xs = division_lines(plot.x, plot.right(), VALUE_DIVISIONS);
        for (value, x) in value_ticks_ascending(self.range_x, VALUE_DIVISIONS).into_iter().zip(xs) {
            surface.fill_text(&format_tick(value), x, plot.bottom() + 5.0, &style);
        }
    }

    fn draw_points(&self, surface: &mut dyn Surface, plot: Bounds, progress: f64) {
        let sx = ValueScale::horizontal(self.range_x, plot.x, plot.right());
        let sy = ValueScale::vertical(self.range_y, plot.y, plot.bottom());
        let radius = lerp(0.0, MAX_POINT_RADIUS, progress);
        if radius <= 0.0 {
            return;
        }
        let datasets = &self.data.datasets;
        for (ds_index, dataset) in datasets.iter().enumerate() {
            let points = dataset.data.points();
            let colors = item_colors(dataset.background_color.as_ref(), ds_index, datasets.len(), points.len());
            let border = dataset.border();
            for (p, color) in points.iter().zip(colors) {
                let dot = Path::circle(Point::new(sx.to_px(p.x), sy.to_px(p.y)), radius);
                surface.fill_path(&dot, color);
                if let Some((border_color, width)) = border {
                    surface.stroke_path(&dot, Stroke::new(border_color, width));
                }
            }
        }
    }
}

impl Renderer for ScatterRenderer {
    fn draw(&self, surface: &mut dyn Surface, bounds: Bounds, progress: f64) {
        let datasets = &self.data.datasets;
        if datasets.is_empty() {
            return;
        }
        let legend = self.options.legend_displayed();
        let plot = cartesian_plot(bounds, legend);

        if legend {
            draw_dataset_legend(surface, bounds, &self.options, datasets, |i, d| {
                Swatch::Dot(series_color(d.background_color.as_ref(), i, datasets.len()))
            });
        }

        draw_value_grid(surface, plot, self.options.y_axis());
        let xs = division_lines(plot.x, plot.right(), VALUE_DIVISIONS);
        draw_category_grid(surface, plot, self.options.x_axis(), &xs);

        draw_value_axis(surface, plot, self.range_y, self.options.y_axis());
        self.draw_x_axis(surface, plot);

        self.draw_points(surface, plot, progress);
    }
}

// File: crates/chartie-core/src/render/bar.rs
// Summary: Grouped bar chart growing from a zero baseline.

use crate::config::{ChartConfig, ChartData, Options};
use crate::geometry::Bounds;
use crate::grid::slot_centers;
use crate::scale::{compute_bar_range, lerp, Range, ValueScale};
use crate::surface::{Stroke, Surface};

use super::common::{
    cartesian_plot, draw_category_axis, draw_category_grid, draw_dataset_legend, draw_value_axis, draw_value_grid,
    item_colors, series_color, Swatch,
};
use super::Renderer;

/// Share of a category slot covered by its group of bars.
const GROUP_FILL: f64 = 0.8;

pub struct BarRenderer {
    data: ChartData,
    options: Options,
    range: Range,
}

impl BarRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        let values = config.data.datasets.iter().flat_map(|d| d.data.values());
        Self { data: config.data.clone(), options: config.options(), range: compute_bar_range(values) }
    }

    /// Cached value-axis range; `min` is never above zero.
    pub fn value_range(&self) -> Range {
        self.range
    }

    fn draw_bars(&self, surface: &mut dyn Surface, plot: Bounds, progress: f64) {
        let Some(labels) = self.data.labels() else { return };
        let datasets = &self.data.datasets;
        let slot = plot.width / labels.len() as f64;
        let group = slot * GROUP_FILL;
        let bar_width = group / datasets.len() as f64;
        let scale = ValueScale::vertical(self.range, plot.y, plot.bottom());
        let zero_y = scale.to_px(0.0);

        for (ds_index, dataset) in datasets.iter().enumerate() {
            let values = dataset.data.values();
            let colors = item_colors(dataset.background_color.as_ref(), ds_index, datasets.len(), values.len());
            let border = dataset.border();

            for (index, (value, color)) in values.iter().zip(colors).enumerate().take(labels.len()) {
                let value_y = scale.to_px(lerp(0.0, *value, progress));
                let group_x = plot.x + index as f64 * slot + (slot - group) / 2.0;
                let bar_x = group_x + ds_index as f64 * bar_width;
                // Negative values hang below the baseline.
                let rect = Bounds::new(bar_x, value_y, (bar_width - 1.0).max(0.0), zero_y - value_y).normalized();
                surface.fill_rect(rect, color);
                if let Some((border_color, width)) = border {
                    surface.stroke_rect(rect, Stroke::new(border_color, width));
                }
            }
        }
    }
}

impl Renderer for BarRenderer {
    fn draw(&self, surface: &mut dyn Surface, bounds: Bounds, progress: f64) {
        let datasets = &self.data.datasets;
        if datasets.is_empty() {
            return;
        }
        let legend = self.options.legend_displayed();
        let plot = cartesian_plot(bounds, legend);

        if legend {
            draw_dataset_legend(surface, bounds, &self.options, datasets, |i, d| {
                Swatch::Box(series_color(d.background_color.as_ref(), i, datasets.len()))
            });
        }

        let labels = self.data.labels().unwrap_or_default();
        let centers = slot_centers(plot.x, plot.width, labels.len());
        draw_value_grid(surface, plot, self.options.y_axis());
        draw_category_grid(surface, plot, self.options.x_axis(), &centers);

        draw_value_axis(surface, plot, self.range, self.options.y_axis());
        draw_category_axis(
            surface,
            plot,
            self.options.x_axis(),
            labels.iter().map(String::as_str).zip(centers.iter().copied()),
        );

        self.draw_bars(surface, plot, progress);
    }
}

// File: crates/chartie-core/src/render/doughnut.rs
// Summary: Doughnut chart: pie slices with the inner 60% of the radius carved out.

use crate::config::{ChartConfig, ChartData, Options};
use crate::geometry::Bounds;
use crate::surface::{Path, Stroke, Surface};

use super::pie::{draw_radial_legend, radial_colors, slice_angles, RadialLayout};
use super::Renderer;

pub const INNER_RADIUS_RATIO: f64 = 0.6;

pub struct DoughnutRenderer {
    data: ChartData,
    options: Options,
}

impl DoughnutRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        Self { data: config.data.clone(), options: config.options() }
    }

    fn draw_rings(&self, surface: &mut dyn Surface, layout: RadialLayout, progress: f64) {
        let Some(dataset) = self.data.datasets.first() else { return };
        if self.data.labels().is_none() {
            return;
        }
        let values = dataset.data.values();
        let colors = radial_colors(dataset, values.len());
        let border = dataset.border();
        let (outer, inner) = (layout.radius, layout.radius * INNER_RADIUS_RATIO);

        for (slice, color) in slice_angles(&values, progress).into_iter().zip(colors) {
            // Outer arc forward, inner arc back: the closed outline is a ring segment.
            let mut path = Path::new();
            path.arc(layout.center, outer, slice.start, slice.end, false)
                .arc(layout.center, inner, slice.end, slice.start, true)
                .close();
            surface.fill_path(&path, color);
            if let Some((border_color, width)) = border {
                surface.stroke_path(&path, Stroke::new(border_color, width));
            }
        }
    }
}

impl Renderer for DoughnutRenderer {
    fn draw(&self, surface: &mut dyn Surface, bounds: Bounds, progress: f64) {
        if self.data.datasets.is_empty() {
            return;
        }
        let legend = self.options.legend_displayed();
        let layout = RadialLayout::compute(bounds, legend);
        if legend {
            draw_radial_legend(surface, bounds, &self.options, &self.data);
        }
        if layout.is_drawable() {
            self.draw_rings(surface, layout, progress);
        }
    }
}

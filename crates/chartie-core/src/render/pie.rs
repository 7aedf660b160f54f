// File: crates/chartie-core/src/render/pie.rs
// Summary: Pie chart plus the radial layout, slice geometry, and legend it shares with doughnut.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::color::{resolve_color_range, Color, ColorSpec};
use crate::config::{ChartConfig, ChartData, Dataset, Options};
use crate::geometry::{Bounds, Point};
use crate::surface::{point_on_circle, Font, Path, Stroke, Surface, TextAlign, TextBaseline, TextStyle};
use crate::types::RADIAL_LEGEND_HEIGHT;

use super::Renderer;

const LEGEND_ITEMS_PER_ROW: usize = 4;
const LABEL_RADIUS: f64 = 0.7;
const LABEL_PROGRESS: f64 = 0.8;

/// Center and outer radius of a pie or doughnut inside `bounds`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialLayout {
    pub center: Point,
    pub radius: f64,
}

impl RadialLayout {
    pub fn compute(bounds: Bounds, legend: bool) -> Self {
        let legend_height = if legend { RADIAL_LEGEND_HEIGHT } else { 0.0 };
        let body = bounds.height - legend_height - 40.0;
        Self {
            center: Point::new(bounds.x + bounds.width / 2.0, bounds.y + legend_height + 20.0 + body / 2.0),
            radius: bounds.width.min(body) / 2.0 - 20.0,
        }
    }

    /// False when the bounds are too small to hold any slice.
    pub fn is_drawable(&self) -> bool {
        self.radius > 0.0 && self.radius.is_finite()
    }
}

/// Angular extent of one slice at a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceAngles {
    pub start: f64,
    /// `start + full_sweep * progress`.
    pub end: f64,
    /// Angle halfway through the full slice, independent of progress.
    pub bisector: f64,
}

/// Slice angles for `values`, clockwise from the top in data order.
///
/// Empty when the total is not a positive finite number.
pub fn slice_angles(values: &[f64], progress: f64) -> Vec<SliceAngles> {
    let total: f64 = values.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            let sweep = v / total * TAU;
            let slice = SliceAngles { start, end: start + sweep * progress, bisector: start + sweep / 2.0 };
            start += sweep;
            slice
        })
        .collect()
}

/// Colors for slices and legend entries, from the dataset or the palette.
pub(crate) fn radial_colors(dataset: &Dataset, len: usize) -> Vec<Color> {
    match &dataset.background_color {
        Some(spec) => resolve_color_range(spec, len),
        None => resolve_color_range(&ColorSpec::palette(), len),
    }
}

/// Category legend: up to four entries per row, one per label.
pub(crate) fn draw_radial_legend(surface: &mut dyn Surface, bounds: Bounds, options: &Options, data: &ChartData) {
    let Some(legend) = options.legend.as_ref().filter(|l| l.is_displayed()) else { return };
    let (Some(labels), Some(dataset)) = (data.labels(), data.datasets.first()) else { return };

    let colors = radial_colors(dataset, labels.len());
    let per_row = LEGEND_ITEMS_PER_ROW.min(labels.len());
    let item_width = (bounds.width - 40.0) / per_row as f64;
    let style = TextStyle::new(legend.label_font(), legend.label_color()).aligned(TextAlign::Left, TextBaseline::Middle);

    for (index, (label, color)) in labels.iter().zip(colors).enumerate() {
        let x = bounds.x + 20.0 + (index % per_row) as f64 * item_width;
        let y = bounds.y + 20.0 + (index / per_row) as f64 * 30.0;
        surface.fill_rect(Bounds::new(x, y - 6.0, 18.0, 12.0), color);
        surface.fill_text(label, x + 25.0, y + 1.0, &style);
    }
}

pub struct PieRenderer {
    data: ChartData,
    options: Options,
}

impl PieRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        Self { data: config.data.clone(), options: config.options() }
    }

    fn draw_slices(&self, surface: &mut dyn Surface, layout: RadialLayout, progress: f64) {
        let (Some(labels), Some(dataset)) = (self.data.labels(), self.data.datasets.first()) else { return };
        let values = dataset.data.values();
        let colors = radial_colors(dataset, values.len());
        let border = dataset.border();
        let label_style = TextStyle::new(Font::new(12.0, "Arial"), Color::rgb(0x33, 0x33, 0x33))
            .aligned(TextAlign::Center, TextBaseline::Middle);

        for (index, (slice, color)) in slice_angles(&values, progress).into_iter().zip(colors).enumerate() {
            let mut path = Path::new();
            path.move_to(layout.center.x, layout.center.y)
                .arc(layout.center, layout.radius, slice.start, slice.end, false)
                .close();
            surface.fill_path(&path, color);
            if let Some((border_color, width)) = border {
                surface.stroke_path(&path, Stroke::new(border_color, width));
            }

            if progress > LABEL_PROGRESS {
                if let Some(label) = labels.get(index) {
                    let at = point_on_circle(layout.center, layout.radius * LABEL_RADIUS, slice.bisector);
                    surface.fill_text(label, at.x, at.y, &label_style);
                }
            }
        }
    }
}

impl Renderer for PieRenderer {
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
            self.draw_slices(surface, layout, progress);
        }
    }
}

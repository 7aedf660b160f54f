// File: crates/chartie-core/src/render/common.rs
// Summary: Layout and decoration helpers shared by the cartesian renderers.

use crate::color::{palette_color, resolve_color_range, Color, ColorSpec};
use crate::config::{AxisConfig, Dataset, FontOptions, Options};
use crate::geometry::{Bounds, Point};
use crate::grid::{division_lines, format_tick};
use crate::scale::Range;
use crate::surface::{Path, Stroke, Surface, TextAlign, TextBaseline, TextStyle};
use crate::types::{
    AXIS_LABEL_WIDTH, LEGEND_GUTTER, LEGEND_HEIGHT, PLOT_BOTTOM_INSET, PLOT_HORIZONTAL_INSET, PLOT_TOP_GAP,
    VALUE_DIVISIONS,
};

const AXIS_LINE: Stroke = Stroke::new(Color::rgb(0x33, 0x33, 0x33), 1.0);
const DEFAULT_GRID_COLOR: Color = Color::rgba(0, 0, 0, 26);
const DEFAULT_TICK_COLOR: Color = Color::rgb(0x66, 0x66, 0x66);
const TICK_GAP: f64 = 5.0;

/// Plot rectangle left after the legend band and the axis-label margins.
pub(crate) fn cartesian_plot(bounds: Bounds, legend: bool) -> Bounds {
    let legend_height = if legend { LEGEND_HEIGHT } else { 0.0 };
    Bounds::new(
        bounds.x + AXIS_LABEL_WIDTH,
        bounds.y + legend_height + PLOT_TOP_GAP,
        bounds.width - PLOT_HORIZONTAL_INSET,
        bounds.height - legend_height - PLOT_BOTTOM_INSET,
    )
}

/// Color standing for a whole dataset: a single color, the first of many, or
/// the palette slot for its index.
pub(crate) fn series_color(spec: Option<&ColorSpec>, index: usize, count: usize) -> Color {
    spec.and_then(ColorSpec::first).unwrap_or_else(|| palette_color(index, count))
}

/// One color per data item: a sequence is resolved item by item, anything else
/// repeats the series color.
pub(crate) fn item_colors(spec: Option<&ColorSpec>, index: usize, count: usize, len: usize) -> Vec<Color> {
    match spec {
        Some(many) if matches!(many, ColorSpec::Many(_)) => resolve_color_range(many, len),
        _ => vec![series_color(spec, index, count); len],
    }
}

fn line(surface: &mut dyn Surface, from: Point, to: Point, stroke: Stroke) {
    let mut path = Path::new();
    path.move_to(from.x, from.y).line_to(to.x, to.y);
    surface.stroke_path(&path, stroke);
}

fn grid_stroke(axis: &AxisConfig) -> Stroke {
    let grid = axis.grid.as_ref();
    Stroke::new(
        grid.and_then(|g| g.color).unwrap_or(DEFAULT_GRID_COLOR),
        grid.and_then(|g| g.line_width).unwrap_or(1.0),
    )
}

fn tick_style(axis: &AxisConfig, align: TextAlign, baseline: TextBaseline) -> TextStyle {
    let ticks = axis.ticks.as_ref();
    let font = FontOptions::resolve(ticks.and_then(|t| t.font.as_ref()), 10.0);
    let color = ticks.and_then(|t| t.color).unwrap_or(DEFAULT_TICK_COLOR);
    TextStyle::new(font, color).aligned(align, baseline)
}

/// Horizontal grid lines at equal divisions of the plot height.
pub(crate) fn draw_value_grid(surface: &mut dyn Surface, plot: Bounds, axis: Option<&AxisConfig>) {
    let Some(axis) = axis.filter(|a| a.grid_displayed()) else { return };
    let stroke = grid_stroke(axis);
    for y in division_lines(plot.y, plot.bottom(), VALUE_DIVISIONS) {
        line(surface, Point::new(plot.x, y), Point::new(plot.right(), y), stroke);
    }
}

/// Vertical grid lines at the given x positions.
pub(crate) fn draw_category_grid(surface: &mut dyn Surface, plot: Bounds, axis: Option<&AxisConfig>, xs: &[f64]) {
    let Some(axis) = axis.filter(|a| a.grid_displayed()) else { return };
    let stroke = grid_stroke(axis);
    for &x in xs {
        line(surface, Point::new(x, plot.y), Point::new(x, plot.bottom()), stroke);
    }
}

/// Left axis line plus right-aligned tick labels for `range`, top to bottom.
pub(crate) fn draw_value_axis(surface: &mut dyn Surface, plot: Bounds, range: Range, axis: Option<&AxisConfig>) {
    let Some(axis) = axis.filter(|a| a.is_displayed()) else { return };
    line(surface, Point::new(plot.x, plot.y), Point::new(plot.x, plot.bottom()), AXIS_LINE);
    if !axis.ticks_displayed() {
        return;
    }
    let style = tick_style(axis, TextAlign::Right, TextBaseline::Middle);
    let ys = division_lines(plot.y, plot.bottom(), VALUE_DIVISIONS);
    for (value, y) in crate::grid::value_ticks(range, VALUE_DIVISIONS).into_iter().zip(ys) {
        surface.fill_text(&format_tick(value), plot.x - TICK_GAP, y, &style);
    }
}

/// Bottom axis line plus centered labels hanging below each x position.
pub(crate) fn draw_category_axis<'a, I>(surface: &mut dyn Surface, plot: Bounds, axis: Option<&AxisConfig>, labels: I)
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let Some(axis) = axis.filter(|a| a.is_displayed()) else { return };
    line(surface, Point::new(plot.x, plot.bottom()), Point::new(plot.right(), plot.bottom()), AXIS_LINE);
    if !axis.ticks_displayed() {
        return;
    }
    let style = tick_style(axis, TextAlign::Center, TextBaseline::Top);
    for (label, x) in labels {
        surface.fill_text(label, x, plot.bottom() + TICK_GAP, &style);
    }
}

/// Legend marker drawn before each dataset label.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Swatch {
    /// 18x12 filled box.
    Box(Color),
    /// 20px stroke, 3px wide.
    Line(Color),
    /// Radius-6 dot.
    Dot(Color),
}

impl Swatch {
    fn text_offset(&self) -> f64 {
        match self {
            Swatch::Box(_) => 28.0,
            Swatch::Line(_) => 30.0,
            Swatch::Dot(_) => 25.0,
        }
    }

    fn draw(&self, surface: &mut dyn Surface, x: f64, y: f64) {
        match *self {
            Swatch::Box(color) => surface.fill_rect(Bounds::new(x, y + 8.0, 18.0, 12.0), color),
            Swatch::Line(color) => line(surface, Point::new(x, y + 12.0), Point::new(x + 20.0, y + 12.0), Stroke::new(color, 3.0)),
            Swatch::Dot(color) => surface.fill_path(&Path::circle(Point::new(x + 10.0, y + 14.0), 6.0), color),
        }
    }
}

/// Left-to-right dataset legend across the top of `bounds`.
pub(crate) fn draw_dataset_legend<F>(surface: &mut dyn Surface, bounds: Bounds, options: &Options, datasets: &[Dataset], swatch: F)
where
    F: Fn(usize, &Dataset) -> Swatch,
{
    let Some(legend) = options.legend.as_ref().filter(|l| l.is_displayed()) else { return };
    let style = TextStyle::new(legend.label_font(), legend.label_color());
    let mut x = bounds.x + 20.0;
    let y = bounds.y + 15.0;
    for (index, dataset) in datasets.iter().enumerate() {
        let marker = swatch(index, dataset);
        marker.draw(surface, x, y);
        let text = dataset.display_label(index);
        surface.fill_text(&text, x + marker.text_offset(), y + 17.0, &style);
        x += surface.measure_text(&text, &style.font) + LEGEND_GUTTER;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_rect_reserves_legend_and_margins() {
        let b = Bounds::new(10.0, 10.0, 780.0, 380.0);
        assert_eq!(cartesian_plot(b, true), Bounds::new(60.0, 70.0, 700.0, 280.0));
        assert_eq!(cartesian_plot(b, false), Bounds::new(60.0, 20.0, 700.0, 330.0));
    }

    #[test]
    fn item_colors_resolve_sequences() {
        let spec = ColorSpec::Many(vec![Color::WHITE]);
        assert_eq!(item_colors(Some(&spec), 0, 1, 3), vec![Color::WHITE; 3]);
        let single = ColorSpec::Single(Color::BLACK);
        assert_eq!(item_colors(Some(&single), 2, 3, 2), vec![Color::BLACK; 2]);
        assert_eq!(item_colors(None, 1, 2, 1), vec![crate::color::DEFAULT_PALETTE[1]]);
    }
}

// File: crates/chartie-core/src/surface.rs
// Summary: Drawing-surface contract, backend-neutral paths, text styles, and DPI setup.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::color::Color;
use crate::geometry::{Bounds, Point, Size};

/// Circular arc segment with HTML-canvas semantics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub anticlockwise: bool,
}

impl Arc {
    /// Signed sweep in radians (negative when anticlockwise).
    ///
    /// A requested sweep of a full turn or more draws a full circle; anything
    /// less is reduced modulo a full turn in the drawing direction.
    pub fn sweep(&self) -> f64 {
        let raw = if self.anticlockwise {
            self.start_angle - self.end_angle
        } else {
            self.end_angle - self.start_angle
        };
        let magnitude = if raw >= TAU { TAU } else { raw.rem_euclid(TAU) };
        if self.anticlockwise { -magnitude } else { magnitude }
    }
}

pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    BezierTo { c1: Point, c2: Point, to: Point },
    Arc(Arc),
    Close,
}

/// Backend-neutral path, built like a canvas path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn bezier_curve_to(&mut self, c1: Point, c2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::BezierTo { c1, c2, to });
        self
    }

    /// Append an arc; connects from the current point with a straight line.
    pub fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool) -> &mut Self {
        self.commands.push(PathCommand::Arc(Arc { center, radius, start_angle, end_angle, anticlockwise }));
        self
    }

    /// Full circle, as used for points and dots.
    pub fn circle(center: Point, radius: f64) -> Self {
        let mut p = Path::new();
        p.arc(center, radius, 0.0, TAU, false);
        p
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every arc in the path, in order.
    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.commands.iter().filter_map(|c| match c {
            PathCommand::Arc(a) => Some(a),
            _ => None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub size: f64,
    /// CSS-style family list, e.g. `"Arial, sans-serif"`.
    pub family: String,
}

impl Font {
    pub fn new(size: f64, family: impl Into<String>) -> Self {
        Self { size, family: family.into() }
    }

    /// Individual family names with quotes and whitespace stripped.
    pub fn families(&self) -> Vec<String> {
        self.family
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Top,
    Middle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    pub fn new(font: Font, color: Color) -> Self {
        Self { font, color, align: TextAlign::Left, baseline: TextBaseline::Alphabetic }
    }

    pub fn aligned(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }
}

/// A 2D drawing target. Coordinates are CSS pixels once [`setup_surface`] has run.
pub trait Surface {
    /// Displayed size in device-independent pixels.
    fn client_size(&self) -> Size;
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }
    /// Resize the backing pixel buffer. Implementations may discard contents.
    fn set_backing_size(&mut self, width: u32, height: u32);
    /// Replace the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f64);
    /// Reset `rect` to fully transparent.
    fn clear_rect(&mut self, rect: Bounds);
    fn fill_rect(&mut self, rect: Bounds, color: Color);
    fn stroke_rect(&mut self, rect: Bounds, stroke: Stroke);
    fn fill_path(&mut self, path: &Path, color: Color);
    fn stroke_path(&mut self, path: &Path, stroke: Stroke);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
    /// Advance width of `text` in CSS pixels.
    fn measure_text(&mut self, text: &str, font: &Font) -> f64;
}

/// Scale the backing buffer by the device pixel ratio and apply a matching
/// transform. Re-run whenever the displayed size changes.
pub fn setup_surface(surface: &mut dyn Surface) {
    let dpr = surface.device_pixel_ratio();
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let size = surface.client_size();
    let width = (size.width.max(0.0) * dpr).round() as u32;
    let height = (size.height.max(0.0) * dpr).round() as u32;
    surface.set_backing_size(width, height);
    surface.set_scale(dpr);
    tracing::trace!(width, height, dpr, "surface backing store configured");
}

/// Host-provided lookup from a key to a drawing surface.
pub trait SurfaceRegistry {
    type Surface: Surface;

    /// Hand over the surface registered under `id`, if any.
    fn take_surface(&mut self, id: &str) -> Option<Self::Surface>;
}

impl<S: Surface> SurfaceRegistry for HashMap<String, S> {
    type Surface = S;

    fn take_surface(&mut self, id: &str) -> Option<S> {
        self.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn arc(start: f64, end: f64, ccw: bool) -> Arc {
        Arc { center: Point::default(), radius: 1.0, start_angle: start, end_angle: end, anticlockwise: ccw }
    }

    #[test]
    fn sweep_follows_canvas_rules() {
        assert!((arc(0.0, PI, false).sweep() - PI).abs() < 1e-12);
        assert_eq!(arc(0.0, TAU, false).sweep(), TAU);
        assert_eq!(arc(0.0, 3.0 * TAU, false).sweep(), TAU);
        assert!((arc(PI, 0.0, true).sweep() + PI).abs() < 1e-12);
        assert!((arc(-FRAC_PI_2, -FRAC_PI_2 - 1.0, false).sweep() - (TAU - 1.0)).abs() < 1e-12);
        assert_eq!(arc(1.0, 1.0, true).sweep(), 0.0);
    }

    #[test]
    fn font_families_split() {
        let f = Font::new(12.0, "\"Segoe UI\", Arial , sans-serif");
        assert_eq!(f.families(), vec!["Segoe UI", "Arial", "sans-serif"]);
    }

    #[test]
    fn circle_is_single_full_arc() {
        let c = Path::circle(Point::new(1.0, 2.0), 3.0);
        let arcs: Vec<_> = c.arcs().collect();
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].sweep(), TAU);
    }
}

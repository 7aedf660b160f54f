// File: crates/chartie-skia/src/surface.rs
// Summary: Skia CPU raster implementation of the chartie drawing surface, with PNG export.

use std::path::Path as FsPath;

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;
use tracing::{debug, warn};

use chartie_core::geometry::rad_to_deg;
use chartie_core::surface::Arc;
use chartie_core::{Bounds, Color, Font, Path, PathCommand, Point, Size, Stroke, Surface, TextAlign, TextBaseline, TextStyle};

use crate::text::TextShaper;

/// Offscreen raster surface with a fixed displayed size and device pixel ratio.
///
/// The pixel buffer is `client size * dpr`; chartie draws in client units once
/// the chart has applied its scale.
pub struct SkiaSurface {
    surface: skia::Surface,
    client: Size,
    dpr: f64,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::with_device_pixel_ratio(width, height, 1.0)
    }

    pub fn with_device_pixel_ratio(width: f64, height: f64, dpr: f64) -> Result<Self> {
        let pixels = ((width * dpr).round() as i32, (height * dpr).round() as i32);
        let surface = raster(pixels.0, pixels.1).ok_or_else(|| anyhow!("failed to create raster surface {pixels:?}"))?;
        Ok(Self { surface, client: Size::new(width, height), dpr, shaper: TextShaper::new() })
    }

    /// Change the displayed size. The backing store follows on the next
    /// `set_backing_size`, normally via `Chart::handle_resize`.
    pub fn set_client_size(&mut self, width: f64, height: f64) {
        self.client = Size::new(width, height);
    }

    /// Backing store size in device pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    /// Unpremultiplied RGBA8 pixels, row-major.
    pub fn rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = self.pixel_size();
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("failed to read back {w}x{h} pixels"));
        }
        Ok(pixels)
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let (w, h) = self.pixel_size();
        let img = image::RgbaImage::from_raw(w as u32, h as u32, self.rgba8()?)
            .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut bytes = std::io::Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(bytes.into_inner())
    }

    pub fn write_png(&mut self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "png written");
        Ok(())
    }

    fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }
}

fn raster(width: i32, height: i32) -> Option<skia::Surface> {
    skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
}

fn to_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn to_rect(b: Bounds) -> skia::Rect {
    skia::Rect::from_xywh(b.x as f32, b.y as f32, b.width as f32, b.height as f32)
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::PaintStyle::Fill);
    paint.set_color(to_color(color));
    paint
}

fn stroke_paint(stroke: Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::PaintStyle::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(to_color(stroke.color));
    paint
}

/// Append a canvas-style arc: joined to the current point by a line, or
/// starting a new contour when there is none.
fn append_arc(out: &mut skia::Path, arc: &Arc, has_current: bool) {
    if arc.radius <= 0.0 {
        let c = to_point(arc.center);
        if has_current { out.line_to(c) } else { out.move_to(c) };
        return;
    }
    let oval = skia::Rect::from_xywh(
        (arc.center.x - arc.radius) as f32,
        (arc.center.y - arc.radius) as f32,
        (arc.radius * 2.0) as f32,
        (arc.radius * 2.0) as f32,
    );
    let start = rad_to_deg(arc.start_angle) as f32;
    let sweep = rad_to_deg(arc.sweep()) as f32;
    // Full turns go in as two halves so the contour ends where it started.
    if sweep.abs() >= 360.0 {
        let half = sweep / 2.0;
        out.arc_to(oval, start, half, !has_current);
        out.arc_to(oval, start + half, half, false);
    } else {
        out.arc_to(oval, start, sweep, !has_current);
    }
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    let mut has_current = false;
    for command in path.commands() {
        match command {
            PathCommand::MoveTo(p) => {
                out.move_to(to_point(*p));
            }
            PathCommand::LineTo(p) => {
                if has_current { out.line_to(to_point(*p)) } else { out.move_to(to_point(*p)) };
            }
            PathCommand::BezierTo { c1, c2, to } => {
                if !has_current {
                    out.move_to(to_point(*c1));
                }
                out.cubic_to(to_point(*c1), to_point(*c2), to_point(*to));
            }
            PathCommand::Arc(arc) => append_arc(&mut out, arc, has_current),
            PathCommand::Close => {
                out.close();
            }
        }
        has_current = true;
    }
    out
}

impl Surface for SkiaSurface {
    fn client_size(&self) -> Size {
        self.client
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        if self.pixel_size() == (width as i32, height as i32) {
            self.canvas().reset_matrix();
            return;
        }
        match raster(width as i32, height as i32) {
            Some(surface) => self.surface = surface,
            None => warn!(width, height, "raster surface allocation failed; keeping previous backing store"),
        }
    }

    fn set_scale(&mut self, scale: f64) {
        let canvas = self.canvas();
        canvas.reset_matrix();
        canvas.scale((scale as f32, scale as f32));
    }

    fn clear_rect(&mut self, rect: Bounds) {
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        self.canvas().draw_rect(to_rect(rect), &paint);
    }

    fn fill_rect(&mut self, rect: Bounds, color: Color) {
        self.canvas().draw_rect(to_rect(rect), &fill_paint(color));
    }

    fn stroke_rect(&mut self, rect: Bounds, stroke: Stroke) {
        self.canvas().draw_rect(to_rect(rect), &stroke_paint(stroke));
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.canvas().draw_path(&to_skia_path(path), &fill_paint(color));
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        self.canvas().draw_path(&to_skia_path(path), &stroke_paint(stroke));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        let paragraph = self.shaper.layout(text, &style.font, to_color(style.color));
        let width = paragraph.max_intrinsic_width();
        let dx = match style.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width / 2.0,
            TextAlign::Right => -width,
        };
        // Paragraphs paint from their top-left corner.
        let dy = match style.baseline {
            TextBaseline::Top => 0.0,
            TextBaseline::Middle => -paragraph.height() / 2.0,
            TextBaseline::Alphabetic => -paragraph.alphabetic_baseline(),
        };
        paragraph.paint(self.surface.canvas(), (x as f32 + dx, y as f32 + dy));
    }

    fn measure_text(&mut self, text: &str, font: &Font) -> f64 {
        self.shaper.measure_width(text, font) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn circles_become_two_half_arcs() {
        let path = to_skia_path(&Path::circle(Point::new(10.0, 10.0), 5.0));
        let bounds = path.bounds();
        assert!((bounds.width() - 10.0).abs() < 0.01, "{bounds:?}");
        assert!((bounds.height() - 10.0).abs() < 0.01, "{bounds:?}");
    }

    #[test]
    fn wedge_starts_at_center() {
        let mut wedge = Path::new();
        wedge.move_to(50.0, 50.0).arc(Point::new(50.0, 50.0), 20.0, 0.0, TAU / 4.0, false).close();
        let path = to_skia_path(&wedge);
        let bounds = path.bounds();
        assert!((bounds.left - 50.0).abs() < 0.01 && (bounds.top - 50.0).abs() < 0.01, "{bounds:?}");
        assert!((bounds.right - 70.0).abs() < 0.01 && (bounds.bottom - 70.0).abs() < 0.01, "{bounds:?}");
    }
}

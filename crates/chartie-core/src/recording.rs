// File: crates/chartie-core/src/recording.rs
// Summary: Headless surface that records drawing commands as a display list.

use crate::color::Color;
use crate::geometry::{Bounds, Size};
use crate::surface::{Font, Path, Stroke, Surface, TextStyle};

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect(Bounds),
    FillRect { rect: Bounds, color: Color },
    StrokeRect { rect: Bounds, stroke: Stroke },
    FillPath { path: Path, color: Color },
    StrokePath { path: Path, stroke: Stroke },
    FillText { text: String, x: f64, y: f64, style: TextStyle },
}

/// Surface that keeps every drawing call in order.
///
/// Text width is approximated as `0.6 * font size` per character so layouts are
/// deterministic without a font stack.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    dpr: f64,
    backing: (u32, u32),
    scale: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { size: Size::new(width, height), dpr: 1.0, backing: (0, 0), scale: 1.0, commands: Vec::new() }
    }

    pub fn with_device_pixel_ratio(mut self, dpr: f64) -> Self {
        self.dpr = dpr;
        self
    }

    /// Simulate the host changing the displayed size.
    pub fn set_client_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    pub fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands recorded since the most recent full-surface clear.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let full = Bounds::new(0.0, 0.0, self.size.width, self.size.height);
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::ClearRect(r) if *r == full))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Number of full frames drawn (full-surface clears recorded).
    pub fn frame_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::ClearRect(_))).count()
    }

    /// Every filled rectangle of `color` in the last frame.
    pub fn filled_rects(&self, color: Color) -> Vec<Bounds> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Every filled path in the last frame, with its color.
    pub fn filled_paths(&self) -> Vec<(&Path, Color)> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillPath { path, color } => Some((path, *color)),
                _ => None,
            })
            .collect()
    }

    /// Text strings drawn in the last frame, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn client_size(&self) -> Size {
        self.size
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.scale = 1.0;
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn clear_rect(&mut self, rect: Bounds) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: Bounds, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Bounds, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeRect { rect, stroke });
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(DrawCommand::FillPath { path: path.clone(), color });
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokePath { path: path.clone(), stroke });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.commands.push(DrawCommand::FillText { text: text.to_string(), x, y, style: style.clone() });
    }

    fn measure_text(&mut self, text: &str, font: &Font) -> f64 {
        text.chars().count() as f64 * font.size * 0.6
    }
}

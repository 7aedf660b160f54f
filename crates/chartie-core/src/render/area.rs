// File: crates/chartie-core/src/render/area.rs
// Summary: Area chart: a line chart whose datasets are always filled.

use crate::config::ChartConfig;
use crate::geometry::Bounds;
use crate::surface::Surface;

use super::{LineRenderer, Renderer};

/// Owns a [`LineRenderer`] built from a copy of the config with `fill` forced on.
pub struct AreaRenderer {
    line: LineRenderer,
}

impl AreaRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        let mut filled = config.clone();
        for dataset in &mut filled.data.datasets {
            dataset.fill = Some(true);
        }
        Self { line: LineRenderer::new(&filled) }
    }

    pub fn line(&self) -> &LineRenderer {
        &self.line
    }
}

impl Renderer for AreaRenderer {
    fn draw(&self, surface: &mut dyn Surface, bounds: Bounds, progress: f64) {
        self.line.draw(surface, bounds, progress);
    }

    fn destroy(&mut self) {
        self.line.destroy();
    }
}

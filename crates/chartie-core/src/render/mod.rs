// File: crates/chartie-core/src/render/mod.rs
// Summary: Renderer contract and the closed set of chart renderers behind it.

mod common;

pub mod area;
pub mod bar;
pub mod doughnut;
pub mod line;
pub mod pie;
pub mod scatter;

pub use area::AreaRenderer;
pub use bar::BarRenderer;
pub use doughnut::DoughnutRenderer;
pub use line::LineRenderer;
pub use pie::PieRenderer;
pub use scatter::ScatterRenderer;

use crate::config::{ChartConfig, ChartType};
use crate::error::Result;
use crate::geometry::Bounds;
use crate::surface::Surface;

/// A chart-type-specific drawing strategy.
///
/// `draw` must not mutate renderer state: any range cache is computed at
/// construction and only read here.
pub trait Renderer {
    /// Draw one frame into `bounds` at animation `progress` in [0,1].
    fn draw(&self, surface: &mut dyn Surface, bounds: Bounds, progress: f64);

    /// Release nested resources. Called once before the renderer is dropped.
    fn destroy(&mut self) {}
}

/// The renderer for a configuration's chart type.
pub enum ChartRenderer {
    Bar(BarRenderer),
    Line(LineRenderer),
    Area(AreaRenderer),
    Pie(PieRenderer),
    Doughnut(DoughnutRenderer),
    Scatter(ScatterRenderer),
}

impl ChartRenderer {
    /// Build the renderer registered for `config.type`.
    pub fn new(config: &ChartConfig) -> Result<Self> {
        Ok(Self::for_kind(config.kind()?, config))
    }

    /// Build the renderer for an already validated `kind`.
    pub fn for_kind(kind: ChartType, config: &ChartConfig) -> Self {
        let renderer = match kind {
            ChartType::Bar => ChartRenderer::Bar(BarRenderer::new(config)),
            ChartType::Line => ChartRenderer::Line(LineRenderer::new(config)),
            ChartType::Area => ChartRenderer::Area(AreaRenderer::new(config)),
            ChartType::Pie => ChartRenderer::Pie(PieRenderer::new(config)),
            ChartType::Doughnut => ChartRenderer::Doughnut(DoughnutRenderer::new(config)),
            ChartType::Scatter => ChartRenderer::Scatter(ScatterRenderer::new(config)),
        };
        if config.data.datasets.iter().all(|d| d.data.is_empty()) {
            tracing::debug!(chart_type = %kind, "no data points; nothing to draw");
        }
        tracing::debug!(chart_type = %kind, "renderer created");
        renderer
    }

    pub fn chart_type(&self) -> ChartType {
        match self {
            ChartRenderer::Bar(_) => ChartType::Bar,
            ChartRenderer::Line(_) => ChartType::Line,
            ChartRenderer::Area(_) => ChartType::Area,
            ChartRenderer::Pie(_) => ChartType::Pie,
            ChartRenderer::Doughnut(_) => ChartType::Doughnut,
            ChartRenderer::Scatter(_) => ChartType::Scatter,
        }
    }

    fn as_renderer(&self) -> &dyn Renderer {
        match self {
            ChartRenderer::Bar(r) => r,
            ChartRenderer::Line(r) => r,
            ChartRenderer::Area(r) => r,
            ChartRenderer::Pie(r) => r,
            ChartRenderer::Doughnut(r) => r,
            ChartRenderer::Scatter(r) => r,
        }
    }

    fn as_renderer_mut(&mut self) -> &mut dyn Renderer {
        match self {
            ChartRenderer::Bar(r) => r,
            ChartRenderer::Line(r) => r,
            ChartRenderer::Area(r) => r,
            ChartRenderer::Pie(r) => r,
            ChartRenderer::Doughnut(r) => r,
            ChartRenderer::Scatter(r) => r,
        }
    }
}

impl Renderer for ChartRenderer {
    fn draw(&self, surface: &mut dyn Surface, bounds: Bounds, progress: f64) {
        self.as_renderer().draw(surface, bounds, progress);
    }

    fn destroy(&mut self) {
        self.as_renderer_mut().destroy();
        tracing::debug!(chart_type = %self.chart_type(), "renderer destroyed");
    }
}

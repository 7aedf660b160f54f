// File: crates/chartie-core/src/lib.rs
// Summary: Core library entry point; exports the chart controller, configuration model, and renderers.

pub mod animation;
pub mod chart;
pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod recording;
pub mod render;
pub mod scale;
pub mod surface;
pub mod types;

pub use animation::{AnimationState, FrameHandle, FrameScheduler, ManualScheduler};
pub use chart::Chart;
pub use color::{resolve_color_range, Color, ColorSpec, DEFAULT_PALETTE};
pub use config::{ChartConfig, ChartData, ChartType, DataPoint, DataSeries, Dataset, Options, PartialConfig};
pub use easing::Easing;
pub use error::{ChartError, Result};
pub use geometry::{Bounds, Point, Size};
pub use recording::{DrawCommand, RecordingSurface};
pub use render::{ChartRenderer, Renderer};
pub use scale::{compute_bar_range, compute_range, lerp, Range};
pub use surface::{setup_surface, Font, Path, PathCommand, Stroke, Surface, SurfaceRegistry, TextAlign, TextBaseline, TextStyle};
pub use types::Padding;

// File: crates/chartie-skia/src/lib.rs
// Summary: Skia backend for chartie-core: raster surface, text shaping, PNG export.

pub mod surface;
pub mod text;

pub use surface::SkiaSurface;
pub use text::TextShaper;

// File: crates/chartie-core/src/error.rs
// Summary: Error type for construction-time and configuration failures.

use thiserror::Error;

/// Failures that abort chart construction or configuration parsing.
///
/// Draw-time problems (empty datasets, missing labels) are never errors; renderers
/// skip them silently.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("drawing surface \"{0}\" not found")]
    SurfaceNotFound(String),

    #[error("unsupported chart type: {0}")]
    UnsupportedChartType(String),

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

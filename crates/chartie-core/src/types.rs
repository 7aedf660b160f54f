// File: crates/chartie-core/src/types.rs
// Summary: Shared layout constants and the outer padding type.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Size};

/// Default outer padding on every side, in pixels.
pub const DEFAULT_PADDING: f64 = 10.0;

/// Height of the legend band on cartesian charts.
pub const LEGEND_HEIGHT: f64 = 50.0;
/// Height of the legend band on pie/doughnut charts.
pub const RADIAL_LEGEND_HEIGHT: f64 = 60.0;
/// Left inset reserved for value-axis labels.
pub const AXIS_LABEL_WIDTH: f64 = 50.0;
/// Total horizontal inset of the plot rectangle (left labels + right gutter).
pub const PLOT_HORIZONTAL_INSET: f64 = 80.0;
/// Gap between the legend band and the plot top.
pub const PLOT_TOP_GAP: f64 = 10.0;
/// Bottom inset reserved for category-axis labels (includes the top gap).
pub const PLOT_BOTTOM_INSET: f64 = 50.0;
/// Number of equal divisions on the value axis.
pub const VALUE_DIVISIONS: usize = 5;
/// Horizontal gutter between cartesian legend entries.
pub const LEGEND_GUTTER: f64 = 70.0;

/// Outer padding between the surface edge and the content bounds.
/// Missing sides fall back to [`DEFAULT_PADDING`].
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl Padding {
    pub const fn uniform(v: f64) -> Self {
        Self { top: Some(v), right: Some(v), bottom: Some(v), left: Some(v) }
    }

    pub fn top(&self) -> f64 { self.top.unwrap_or(DEFAULT_PADDING) }
    pub fn right(&self) -> f64 { self.right.unwrap_or(DEFAULT_PADDING) }
    pub fn bottom(&self) -> f64 { self.bottom.unwrap_or(DEFAULT_PADDING) }
    pub fn left(&self) -> f64 { self.left.unwrap_or(DEFAULT_PADDING) }

    /// Content bounds of a surface of `size` after subtracting this padding.
    pub fn content_bounds(&self, size: Size) -> Bounds {
        Bounds::new(
            self.left(),
            self.top(),
            size.width - self.left() - self.right(),
            size.height - self.top() - self.bottom(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_bounds_subtracts_each_side() {
        let p = Padding { top: Some(0.0), right: None, bottom: Some(20.0), left: Some(5.0) };
        let b = p.content_bounds(Size::new(200.0, 100.0));
        assert_eq!(b, Bounds::new(5.0, 0.0, 185.0, 80.0));
    }
}

// File: crates/chartie-core/src/scale.rs
// Summary: Value ranges with padding, interpolation, and linear data-to-pixel scales.

/// Closed value interval used to map data onto an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const UNIT: Range = Range { min: 0.0, max: 1.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widen the range so it contains zero at its lower end or below.
    pub fn including_zero_floor(self) -> Self {
        Self { min: self.min.min(0.0), max: self.max }
    }

    /// Value at fraction `t` of the way from `min` to `max`.
    pub fn at(&self, t: f64) -> f64 {
        lerp(self.min, self.max, t)
    }
}

/// Padded `{min, max}` over `values`.
///
/// Empty input yields `{0, 1}`. Otherwise both ends are pushed out by 10% of the
/// span. A zero span (all values equal) is padded by 10% of the magnitude, or by
/// 0.5 around zero, so the result never collapses to a point.
pub fn compute_range<I>(values: I) -> Range
where
    I: IntoIterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return Range::UNIT;
    }
    let span = max - min;
    let padding = if span > 0.0 {
        span * 0.1
    } else if max != 0.0 {
        max.abs() * 0.1
    } else {
        0.5
    };
    Range { min: min - padding, max: max + padding }
}

/// Value range of a bar chart: padded like [`compute_range`], with zero always visible.
pub fn compute_bar_range<I>(values: I) -> Range
where
    I: IntoIterator<Item = f64>,
{
    compute_range(values).including_zero_floor()
}

#[inline]
pub fn lerp(start: f64, end: f64, progress: f64) -> f64 {
    start + (end - start) * progress
}

/// Linear map from a value range onto a pixel interval.
///
/// For vertical axes `px_at_min` is the bottom edge, so larger values land higher.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub range: Range,
    pub px_at_min: f64,
    pub px_at_max: f64,
}

impl ValueScale {
    /// Vertical scale over `[top_px, bottom_px]`, inverted.
    pub fn vertical(range: Range, top_px: f64, bottom_px: f64) -> Self {
        Self { range, px_at_min: bottom_px, px_at_max: top_px }
    }

    /// Horizontal scale over `[left_px, right_px]`.
    pub fn horizontal(range: Range, left_px: f64, right_px: f64) -> Self {
        Self { range, px_at_min: left_px, px_at_max: right_px }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = self.range.span();
        let span = if span.abs() < 1e-12 { 1e-12 } else { span };
        self.px_at_min + (v - self.range.min) / span * (self.px_at_max - self.px_at_min)
    }
}

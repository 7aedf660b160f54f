// File: crates/chartie-core/src/grid.rs
// Summary: Grid/tick layout helpers shared by the cartesian renderers.

use crate::scale::Range;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Pixel offsets of `divisions + 1` grid lines spread evenly over `[start, end]`.
pub fn division_lines(start: f64, end: f64, divisions: usize) -> Vec<f64> {
    linspace(start, end, divisions + 1)
}

/// Tick values of a vertical axis listed top to bottom (max first).
pub fn value_ticks(range: Range, divisions: usize) -> Vec<f64> {
    let d = divisions.max(1) as f64;
    (0..=divisions.max(1)).map(|i| range.at(1.0 - i as f64 / d)).collect()
}

/// Tick values of a horizontal axis listed left to right (min first).
pub fn value_ticks_ascending(range: Range, divisions: usize) -> Vec<f64> {
    let d = divisions.max(1) as f64;
    (0..=divisions.max(1)).map(|i| range.at(i as f64 / d)).collect()
}

/// Tick label text: one decimal place.
pub fn format_tick(v: f64) -> String {
    let s = format!("{v:.1}");
    // "-0.0" reads oddly on an axis
    if s == "-0.0" { "0.0".to_string() } else { s }
}

/// X positions of `count` category slot centers across `[left, left + width]`.
pub fn slot_centers(left: f64, width: f64, count: usize) -> Vec<f64> {
    if count == 0 { return Vec::new(); }
    let step = width / count as f64;
    (0..count).map(|i| left + step * (i as f64 + 0.5)).collect()
}

/// X positions of `count` points spread edge-to-edge across `[left, left + width]`.
/// A single point sits at the horizontal center.
pub fn point_positions(left: f64, width: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![left + width / 2.0],
        n => linspace(left, left + width, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_divisions_give_six_lines() {
        let lines = division_lines(0.0, 100.0, 5);
        assert_eq!(lines, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn ticks_run_top_down() {
        let t = value_ticks(Range::new(0.0, 10.0), 5);
        assert_eq!(t.first().copied(), Some(10.0));
        assert_eq!(t.last().copied(), Some(0.0));
        assert_eq!(t.len(), 6);
        assert_eq!(value_ticks_ascending(Range::new(0.0, 10.0), 5)[1], 2.0);
    }

    #[test]
    fn tick_format_one_decimal() {
        assert_eq!(format_tick(3.14159), "3.1");
        assert_eq!(format_tick(-0.01), "0.0");
        assert_eq!(format_tick(22.0), "22.0");
    }

    #[test]
    fn positions_handle_small_counts() {
        assert!(point_positions(0.0, 100.0, 0).is_empty());
        assert_eq!(point_positions(0.0, 100.0, 1), vec![50.0]);
        assert_eq!(point_positions(0.0, 100.0, 3), vec![0.0, 50.0, 100.0]);
        assert_eq!(slot_centers(0.0, 100.0, 2), vec![25.0, 75.0]);
    }
}

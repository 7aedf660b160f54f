// File: crates/chartie-core/tests/smoke.rs
// Purpose: End-to-end construction checks on a recording surface.

use std::collections::HashMap;

use chartie_core::{
    Bounds, Chart, ChartConfig, ChartData, ChartError, ChartType, Dataset, ManualScheduler, RecordingSurface,
    DEFAULT_PALETTE,
};

fn bar_config() -> ChartConfig {
    ChartConfig::new(ChartType::Bar, ChartData::new(["A", "B"], vec![Dataset::values(vec![10.0, 20.0])]))
}

/// Bars in the last frame, excluding the 18px legend swatch.
fn bars(surface: &RecordingSurface) -> Vec<Bounds> {
    surface.filled_rects(DEFAULT_PALETTE[0]).into_iter().filter(|r| r.width > 18.0).collect()
}

#[test]
fn bar_heights_share_a_zero_baseline() {
    let mut chart = Chart::new(RecordingSurface::new(800.0, 400.0), ManualScheduler::new(), bar_config())
        .expect("bar chart builds");
    chart.run_animation(16.0);
    assert!(!chart.is_animating());

    let bars = bars(chart.surface());
    assert_eq!(bars.len(), 2);
    let (a, b) = (bars[0], bars[1]);
    assert!((b.height - 2.0 * a.height).abs() < 1e-9, "A={} B={}", a.height, b.height);
    assert!((a.bottom() - b.bottom()).abs() < 1e-9);
    assert!(a.x < b.x);
}

#[test]
fn unsupported_type_fails_construction() {
    let mut config = bar_config();
    config.chart_type = "radar".into();
    let err = Chart::new(RecordingSurface::new(100.0, 100.0), ManualScheduler::new(), config)
        .err()
        .expect("radar must not build");
    assert!(matches!(err, ChartError::UnsupportedChartType(ref t) if t == "radar"));
    assert_eq!(err.to_string(), "unsupported chart type: radar");
}

#[test]
fn registry_lookup() {
    let mut registry: HashMap<String, RecordingSurface> = HashMap::new();
    registry.insert("sales".into(), RecordingSurface::new(320.0, 200.0));

    let missing = Chart::from_registry(&mut registry, "nope", ManualScheduler::new(), bar_config());
    assert!(matches!(missing, Err(ChartError::SurfaceNotFound(ref id)) if id == "nope"));

    let mut radar = bar_config();
    radar.chart_type = "radar".into();
    assert!(Chart::from_registry(&mut registry, "sales", ManualScheduler::new(), radar).is_err());
    assert!(registry.contains_key("sales"), "failed construction must leave the surface registered");

    let chart = Chart::from_registry(&mut registry, "sales", ManualScheduler::new(), bar_config()).unwrap();
    assert_eq!(chart.chart_type(), Some(ChartType::Bar));
    assert!(registry.is_empty());
}

#[test]
fn every_chart_type_draws_without_data() {
    for t in ChartType::ALL {
        let config = ChartConfig::new(t, ChartData::default());
        let mut chart = Chart::new(RecordingSurface::new(200.0, 200.0), ManualScheduler::new(), config).unwrap();
        chart.run_animation(100.0);
        // Clear plus background, nothing else.
        assert_eq!(chart.surface().last_frame().len(), 2, "{t}");
    }
}

// File: crates/chartie-core/tests/renderers.rs
// Purpose: Per-renderer geometry at fixed progress values, drawn straight onto a recording surface.

use std::f64::consts::TAU;

use chartie_core::render::doughnut::INNER_RADIUS_RATIO;
use chartie_core::render::AreaRenderer;
use chartie_core::{
    Bounds, ChartConfig, ChartData, ChartRenderer, ChartType, Color, DataPoint, Dataset, DrawCommand,
    RecordingSurface, Renderer, DEFAULT_PALETTE,
};

const BOUNDS: Bounds = Bounds { x: 10.0, y: 10.0, width: 780.0, height: 380.0 };
/// Bottom edge of the cartesian plot inside `BOUNDS` with the legend shown.
const PLOT_BOTTOM: f64 = 350.0;

fn draw(config: ChartConfig, progress: f64) -> RecordingSurface {
    let renderer = ChartRenderer::new(&config.with_defaults()).unwrap();
    let mut surface = RecordingSurface::new(800.0, 400.0);
    renderer.draw(&mut surface, BOUNDS, progress);
    surface
}

fn bars(surface: &RecordingSurface, color: Color) -> Vec<Bounds> {
    surface.filled_rects(color).into_iter().filter(|r| r.width > 18.0).collect()
}

fn pie_config(t: ChartType) -> ChartConfig {
    ChartConfig::new(
        t,
        ChartData::new(
            ["React", "Vue", "Angular", "Svelte", "Next.js"],
            vec![Dataset::values(vec![35.0, 25.0, 20.0, 12.0, 8.0])],
        ),
    )
}

#[test]
fn negative_bars_hang_from_the_zero_baseline() {
    let config = ChartConfig::new(ChartType::Bar, ChartData::new(["A", "B"], vec![Dataset::values(vec![-10.0, 20.0])]));
    let surface = draw(config, 1.0);
    let bars = bars(&surface, DEFAULT_PALETTE[0]);
    assert_eq!(bars.len(), 2);
    let (neg, pos) = (bars[0], bars[1]);
    assert!((neg.y - pos.bottom()).abs() < 1e-9, "both bars meet at zero");
    assert!((pos.height - 2.0 * neg.height).abs() < 1e-9);
}

#[test]
fn bar_axis_labels_span_the_cached_range() {
    let config = ChartConfig::new(ChartType::Bar, ChartData::new(["A", "B"], vec![Dataset::values(vec![10.0, 20.0])]));
    let surface = draw(config, 0.3);
    let texts = surface.texts();
    for expected in ["21.0", "16.8", "0.0", "A", "B", "Dataset 1"] {
        assert!(texts.contains(&expected), "missing {expected}: {texts:?}");
    }
}

#[test]
fn bar_item_colors_and_label_limit() {
    let red = Color::rgb(255, 0, 0);
    let green = Color::rgb(0, 255, 0);
    let config = ChartConfig::new(
        ChartType::Bar,
        ChartData::new(["A", "B"], vec![Dataset::values(vec![1.0, 2.0, 3.0]).with_background(vec![red, green])]),
    );
    let surface = draw(config, 1.0);
    assert_eq!(bars(&surface, red).len(), 1);
    // The third value has no label slot.
    assert_eq!(bars(&surface, green).len(), 1);
}

#[test]
fn grouped_bars_split_the_slot() {
    let config = ChartConfig::new(
        ChartType::Bar,
        ChartData::new(["Jan"], vec![Dataset::values(vec![5.0]), Dataset::values(vec![7.0])]),
    );
    let surface = draw(config, 1.0);
    let first = bars(&surface, DEFAULT_PALETTE[0]);
    let second = bars(&surface, DEFAULT_PALETTE[1]);
    // Slot 700 wide, group 560, two bars of 280 minus a 1px gap.
    assert_eq!(first[0].width, 279.0);
    assert_eq!(second[0].x - first[0].x, 280.0);
}

#[test]
fn line_points_rise_from_the_baseline() {
    let config = ChartConfig::new(
        ChartType::Line,
        ChartData::new(["A", "B", "C"], vec![Dataset::values(vec![1.0, 5.0, 3.0])]),
    );
    let dots = |surface: &RecordingSurface| -> Vec<(f64, f64)> {
        surface
            .filled_paths()
            .into_iter()
            .flat_map(|(p, _)| p.arcs().filter(|a| a.radius == 3.0).map(|a| (a.center.x, a.center.y)).collect::<Vec<_>>())
            .collect()
    };

    let start = dots(&draw(config.clone(), 0.0));
    assert_eq!(start.len(), 3);
    assert!(start.iter().all(|(_, y)| *y == PLOT_BOTTOM));
    assert_eq!(start[0].0, 60.0);
    assert_eq!(start[2].0, 760.0);

    let end = dots(&draw(config, 1.0));
    assert!(end[1].1 < end[2].1 && end[2].1 < end[0].1);
}

#[test]
fn tension_switches_to_curves() {
    let config = ChartConfig::new(
        ChartType::Line,
        ChartData::new(["A", "B"], vec![Dataset::values(vec![1.0, 2.0]).with_tension(0.4)]),
    );
    let surface = draw(config, 1.0);
    let curved = surface.last_frame().iter().any(|c| match c {
        DrawCommand::StrokePath { path, .. } => {
            path.commands().iter().any(|c| matches!(c, chartie_core::PathCommand::BezierTo { .. }))
        }
        _ => false,
    });
    assert!(curved);
}

#[test]
fn area_fills_under_every_line() {
    let data = ChartData::new(["Q1", "Q2", "Q3", "Q4"], vec![Dataset::values(vec![100.0, 150.0, 300.0, 250.0])]);
    let translucent = |surface: &RecordingSurface| {
        surface.filled_paths().into_iter().filter(|(_, c)| c.a < 255).map(|(_, c)| c).collect::<Vec<_>>()
    };

    let area = draw(ChartConfig::new(ChartType::Area, data.clone()), 1.0);
    let fills = translucent(&area);
    assert_eq!(fills.len(), 1);
    assert_eq!(Color { a: 255, ..fills[0] }, DEFAULT_PALETTE[0]);

    let line = draw(ChartConfig::new(ChartType::Line, data.clone()), 1.0);
    assert!(translucent(&line).is_empty());

    let wrapped = AreaRenderer::new(&ChartConfig::new(ChartType::Area, data));
    assert!(wrapped.line().datasets().iter().all(|d| d.fill == Some(true)));
}

#[test]
fn pie_slices_cover_the_full_turn() {
    let surface = draw(pie_config(ChartType::Pie), 1.0);
    let sweeps: Vec<f64> = surface.filled_paths().iter().flat_map(|(p, _)| p.arcs().map(|a| a.sweep())).collect();
    assert_eq!(sweeps.len(), 5);
    assert!((sweeps.iter().sum::<f64>() - TAU).abs() < 1e-9);
}

#[test]
fn pie_labels_appear_late_in_the_sweep() {
    let legend_only = draw(pie_config(ChartType::Pie), 0.8);
    assert_eq!(legend_only.texts().len(), 5);

    let labelled = draw(pie_config(ChartType::Pie), 0.85);
    assert_eq!(labelled.texts().len(), 10);
}

#[test]
fn pie_colors_match_legend() {
    let surface = draw(pie_config(ChartType::Pie), 1.0);
    for (i, color) in DEFAULT_PALETTE.iter().take(5).enumerate() {
        assert_eq!(surface.filled_rects(*color).len(), 1, "legend box {i}");
        assert_eq!(surface.filled_paths()[i].1, *color, "slice {i}");
    }
}

#[test]
fn doughnut_carves_the_inner_ring() {
    let surface = draw(pie_config(ChartType::Doughnut), 1.0);
    let paths = surface.filled_paths();
    assert_eq!(paths.len(), 5);
    for (path, _) in paths {
        let arcs: Vec<_> = path.arcs().collect();
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[1].radius, arcs[0].radius * INNER_RADIUS_RATIO);
        assert!(!arcs[0].anticlockwise && arcs[1].anticlockwise);
        assert_eq!(arcs[0].end_angle, arcs[1].start_angle);
    }
    // Doughnuts draw no in-slice labels.
    assert_eq!(surface.texts().len(), 5);
}

#[test]
fn doughnut_inner_ratio_holds_at_every_size() {
    let renderer = ChartRenderer::new(&pie_config(ChartType::Doughnut).with_defaults()).unwrap();
    let sizes = [
        BOUNDS,
        Bounds::new(0.0, 0.0, 100.0, 600.0),
        Bounds::new(0.0, 0.0, 600.0, 200.0),
        Bounds::new(5.0, 5.0, 120.0, 180.0),
    ];
    for bounds in sizes {
        let mut surface = RecordingSurface::new(800.0, 800.0);
        renderer.draw(&mut surface, bounds, 1.0);
        let paths = surface.filled_paths();
        assert_eq!(paths.len(), 5, "{bounds:?}");
        for (path, _) in paths {
            let arcs: Vec<_> = path.arcs().collect();
            assert!(arcs[0].radius > 0.0, "{bounds:?}");
            assert!((arcs[1].radius - arcs[0].radius * INNER_RADIUS_RATIO).abs() < 1e-9, "{bounds:?}");
        }
    }
}

#[test]
fn radial_charts_need_labels() {
    let mut config = pie_config(ChartType::Pie);
    config.data.labels = None;
    assert!(draw(config, 1.0).filled_paths().is_empty());
}

#[test]
fn zero_total_pie_is_skipped() {
    let config = ChartConfig::new(ChartType::Pie, ChartData::new(["A", "B"], vec![Dataset::values(vec![0.0, 0.0])]));
    assert!(draw(config, 1.0).filled_paths().is_empty());
}

#[test]
fn scatter_radius_grows_but_positions_hold() {
    let config = ChartConfig::new(
        ChartType::Scatter,
        ChartData::unlabeled(vec![Dataset::points(vec![
            DataPoint::new(0.0, 0.0),
            DataPoint::new(5.0, 5.0),
            DataPoint::new(10.0, 2.0),
        ])]),
    );
    let points = |surface: &RecordingSurface, r: f64| -> Vec<(f64, f64)> {
        surface
            .filled_paths()
            .into_iter()
            .flat_map(|(p, _)| p.arcs().filter(|a| a.radius == r).map(|a| (a.center.x, a.center.y)).collect::<Vec<_>>())
            .collect()
    };

    let half = draw(config.clone(), 0.5);
    let full = draw(config.clone(), 1.0);
    assert_eq!(points(&half, 2.0), points(&full, 4.0));
    assert_eq!(points(&full, 4.0).len(), 3);

    let texts = full.texts();
    assert!(texts.contains(&"-1.0") && texts.contains(&"11.0"), "{texts:?}");

    assert!(points(&draw(config, 0.0), 0.0).is_empty());
}

#[test]
fn empty_datasets_draw_nothing() {
    for t in ChartType::ALL {
        let surface = draw(ChartConfig::new(t, ChartData::default()), 1.0);
        assert!(surface.commands().is_empty(), "{t}");
    }
}

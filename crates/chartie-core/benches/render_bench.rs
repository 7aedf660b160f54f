// File: crates/chartie-core/benches/render_bench.rs
// Purpose: Frame cost of each renderer on a recording surface.

use chartie_core::{
    Bounds, ChartConfig, ChartData, ChartRenderer, ChartType, DataPoint, Dataset, RecordingSurface, Renderer,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_config(t: ChartType, n: usize) -> ChartConfig {
    let labels: Vec<String> = (0..n).map(|i| format!("L{i}")).collect();
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin() * 50.0 + 60.0).collect();
    let datasets = if t == ChartType::Scatter {
        let points = values.iter().enumerate().map(|(i, v)| DataPoint::new(i as f64, *v)).collect();
        vec![Dataset::points(points)]
    } else {
        vec![Dataset::values(values.clone()).with_tension(0.3), Dataset::values(values)]
    };
    ChartConfig::new(t, ChartData::new(labels, datasets)).with_defaults()
}

fn bench_draw(c: &mut Criterion) {
    let bounds = Bounds::new(10.0, 10.0, 780.0, 480.0);
    let mut group = c.benchmark_group("draw_frame");
    for t in ChartType::ALL {
        for &n in &[12usize, 500usize] {
            let renderer = ChartRenderer::new(&build_config(t, n)).expect("known chart type");
            group.bench_function(format!("{t}_{n}"), |b| {
                let mut surface = RecordingSurface::new(800.0, 500.0);
                b.iter(|| {
                    renderer.draw(&mut surface, bounds, black_box(0.5));
                    black_box(surface.take_commands());
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);

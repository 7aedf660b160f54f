// File: crates/chartie-demo/src/main.rs
// Summary: Headless demo: animates chart configurations on a Skia surface and writes PNG frames.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chartie_core::{Chart, ChartConfig, FrameScheduler, ManualScheduler};
use chartie_skia::SkiaSurface;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
/// One display refresh at 60Hz, in ms.
const FRAME_MS: f64 = 16.0;

const SHOWCASE: [(&str, &str); 6] = [
    ("bar", include_str!("../assets/bar.json")),
    ("line", include_str!("../assets/line.json")),
    ("pie", include_str!("../assets/pie.json")),
    ("doughnut", include_str!("../assets/doughnut.json")),
    ("area", include_str!("../assets/area.json")),
    ("scatter", include_str!("../assets/scatter.json")),
];

/// Animate chart configurations and write PNG frames.
#[derive(Parser, Debug)]
#[command(name = "chartie-demo", version, about)]
struct Args {
    /// Chart configuration files (JSON). Renders the built-in showcase when empty.
    configs: Vec<PathBuf>,

    /// Output directory for PNG frames and effective configs
    #[arg(long, default_value = "target/chartie")]
    out: PathBuf,

    /// Snapshots written before the final frame, evenly spaced over the animation
    #[arg(long, default_value_t = 1)]
    frames: usize,
}

fn load_configs(paths: &[PathBuf]) -> Result<Vec<(String, ChartConfig)>> {
    if paths.is_empty() {
        return SHOWCASE
            .iter()
            .map(|(name, json)| Ok((name.to_string(), ChartConfig::from_json(json)?)))
            .collect();
    }
    paths
        .iter()
        .map(|path| {
            let json = std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
            let config = ChartConfig::from_json(&json).with_context(|| format!("failed to parse '{}'", path.display()))?;
            let name = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "chart".into());
            Ok((name, config))
        })
        .collect()
}

/// Animate one chart to completion, writing `frames` intermediate snapshots and the final frame.
fn render_chart(name: &str, config: ChartConfig, out: &Path, frames: usize) -> Result<()> {
    let surface = SkiaSurface::new(WIDTH, HEIGHT)?;
    let mut chart = Chart::new(surface, ManualScheduler::new(), config)
        .with_context(|| format!("failed to build chart '{name}'"))?;
    let duration = chart.config().options().animation_duration();
    info!(chart = name, chart_type = %chart.config().chart_type, duration, "rendering");

    let mut marks: Vec<f64> = (1..=frames).map(|k| duration * k as f64 / (frames + 1) as f64).collect();
    marks.reverse();
    let mut delivered = 0usize;
    while let Some(handle) = chart.scheduler_mut().next_frame() {
        chart.scheduler_mut().advance(FRAME_MS);
        chart.on_frame(handle);
        delivered += 1;

        let now = chart.scheduler().now();
        while marks.last().is_some_and(|t| now >= *t) {
            marks.pop();
            let path = out.join(format!("{name}-{now:04.0}ms.png"));
            chart.surface_mut().write_png(&path)?;
            info!(path = %path.display(), "snapshot");
        }
    }

    let path = out.join(format!("{name}.png"));
    chart.surface_mut().write_png(&path)?;
    std::fs::write(out.join(format!("{name}.json")), chart.config().to_json_pretty()?)
        .with_context(|| format!("failed to write effective config for '{name}'"))?;
    info!(path = %path.display(), frames = delivered, "wrote final frame");
    chart.destroy();
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    std::fs::create_dir_all(&args.out).with_context(|| format!("failed to create '{}'", args.out.display()))?;

    let configs = load_configs(&args.configs)?;
    info!(count = configs.len(), out = %args.out.display(), "loaded chart configurations");
    for (name, config) in configs {
        render_chart(&name, config, &args.out, args.frames)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_the_showcase() {
        let args = Args::try_parse_from(["chartie-demo"]).unwrap();
        assert!(args.configs.is_empty());
        assert_eq!(args.out, PathBuf::from("target/chartie"));
        assert_eq!(args.frames, 1);
        assert_eq!(load_configs(&args.configs).unwrap().len(), SHOWCASE.len());
    }

    #[test]
    fn flags_and_config_paths() {
        let args = Args::try_parse_from(["chartie-demo", "a.json", "--out", "frames", "--frames", "4", "b.json"]).unwrap();
        assert_eq!(args.configs, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
        assert_eq!(args.out, PathBuf::from("frames"));
        assert_eq!(args.frames, 4);
        assert!(Args::try_parse_from(["chartie-demo", "--frames", "many"]).is_err());
    }
}

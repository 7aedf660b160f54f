// File: crates/chartie-core/src/config.rs
// Summary: Declarative chart configuration (JSON-compatible) and option defaulting.
// Notes:
// - Option groups merge shallowly: a group supplied by the caller replaces the
//   default group wholesale. Readers fall back to the same literal defaults for
//   any leaf the caller left out.
// - Scale defaults are injected for cartesian chart types only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorSpec};
use crate::easing::Easing;
use crate::error::{ChartError, Result};
use crate::surface::Font;
use crate::types::Padding;

pub const DEFAULT_DURATION_MS: f64 = 800.0;
pub const DEFAULT_FONT_FAMILY: &str = "Arial, sans-serif";

/// Closed set of chart kinds with a registered renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Doughnut,
    Area,
    Scatter,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Doughnut,
        ChartType::Area,
        ChartType::Scatter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Doughnut => "doughnut",
            ChartType::Area => "area",
            ChartType::Scatter => "scatter",
        }
    }

    /// Charts drawn on x/y axes (and therefore given scale defaults).
    pub fn is_cartesian(&self) -> bool {
        matches!(self, ChartType::Bar | ChartType::Line | ChartType::Area | ChartType::Scatter)
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        ChartType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ChartError::UnsupportedChartType(s.to_string()))
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level configuration handed to a chart.
///
/// The `type` tag stays a plain string so that an unknown tag is reported as
/// [`ChartError::UnsupportedChartType`] when a renderer is looked up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    #[serde(default)]
    pub data: ChartData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

impl ChartConfig {
    pub fn new(chart_type: ChartType, data: ChartData) -> Self {
        Self { chart_type: chart_type.as_str().to_string(), data, options: None }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Look up the registered chart kind for the `type` tag.
    pub fn kind(&self) -> Result<ChartType> {
        self.chart_type.parse()
    }

    /// Fill omitted option groups with their defaults.
    pub fn with_defaults(mut self) -> Self {
        let builder = OptionsBuilder::for_type(&self.chart_type);
        self.options = Some(builder.build(self.options.take()));
        self
    }

    /// Shallow merge: every top-level field present in `patch` replaces ours.
    pub fn merge(mut self, patch: PartialConfig) -> Self {
        if let Some(t) = patch.chart_type {
            self.chart_type = t;
        }
        if let Some(d) = patch.data {
            self.data = d;
        }
        if let Some(o) = patch.options {
            self.options = Some(o);
        }
        self
    }

    /// Options, or an empty set when none were given.
    pub fn options(&self) -> Options {
        self.options.clone().unwrap_or_default()
    }
}

/// Update patch for [`crate::Chart::update`]; absent fields keep their value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ChartData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

impl PartialConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn chart_type(t: ChartType) -> Self {
        Self { chart_type: Some(t.as_str().to_string()), ..Self::default() }
    }

    pub fn data(data: ChartData) -> Self {
        Self { data: Some(data), ..Self::default() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn new<L, S>(labels: L, datasets: Vec<Dataset>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { labels: Some(labels.into_iter().map(Into::into).collect()), datasets }
    }

    pub fn unlabeled(datasets: Vec<Dataset>) -> Self {
        Self { labels: None, datasets }
    }

    /// Category labels, when present and non-empty.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref().filter(|l| !l.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub data: DataSeries,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

impl Dataset {
    pub fn values(values: Vec<f64>) -> Self {
        Self { data: DataSeries::Values(values), ..Self::default() }
    }

    pub fn points(points: Vec<DataPoint>) -> Self {
        Self { data: DataSeries::Points(points), ..Self::default() }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_background(mut self, colors: impl Into<ColorSpec>) -> Self {
        self.background_color = Some(colors.into());
        self
    }

    pub fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border_color = Some(color);
        self.border_width = Some(width);
        self
    }

    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Legend text: the label, or `Dataset N` (1-based).
    pub fn display_label(&self, index: usize) -> String {
        self.label.clone().unwrap_or_else(|| format!("Dataset {}", index + 1))
    }

    /// Border stroke when both color and a positive width are set.
    pub fn border(&self) -> Option<(Color, f64)> {
        match (self.border_color, self.border_width) {
            (Some(c), Some(w)) if w > 0.0 => Some((c, w)),
            _ => None,
        }
    }

    /// Smoothing factor clamped to [0,1].
    pub fn tension(&self) -> f64 {
        self.tension.unwrap_or(0.0).clamp(0.0, 1.0)
    }
}

/// Homogeneous dataset values: all scalars or all `{x, y}` points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataSeries {
    Values(Vec<f64>),
    Points(Vec<DataPoint>),
}

impl Default for DataSeries {
    fn default() -> Self {
        DataSeries::Values(Vec::new())
    }
}

impl DataSeries {
    pub fn len(&self) -> usize {
        match self {
            DataSeries::Values(v) => v.len(),
            DataSeries::Points(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scalar view: the values themselves, or each point's `y`.
    pub fn values(&self) -> Vec<f64> {
        match self {
            DataSeries::Values(v) => v.clone(),
            DataSeries::Points(p) => p.iter().map(|p| p.y).collect(),
        }
    }

    /// Point view; scalar datasets have no points.
    pub fn points(&self) -> &[DataPoint] {
        match self {
            DataSeries::Values(_) => &[],
            DataSeries::Points(p) => p,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

impl Options {
    pub fn legend_displayed(&self) -> bool {
        self.legend.as_ref().is_some_and(LegendOptions::is_displayed)
    }

    pub fn padding(&self) -> Padding {
        self.padding.unwrap_or_default()
    }

    pub fn x_axis(&self) -> Option<&AxisConfig> {
        self.scales.as_ref().and_then(|s| s.x.as_ref())
    }

    pub fn y_axis(&self) -> Option<&AxisConfig> {
        self.scales.as_ref().and_then(|s| s.y.as_ref())
    }

    /// Animation length in ms; zero when the animation group or its duration is absent.
    pub fn animation_duration(&self) -> f64 {
        self.animation.as_ref().and_then(|a| a.duration).unwrap_or(0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl AnimationOptions {
    pub fn defaults() -> Self {
        Self { duration: Some(DEFAULT_DURATION_MS), easing: Some(Easing::EaseInOut) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisConfig>,
}

impl Scales {
    pub fn defaults() -> Self {
        Self { x: Some(AxisConfig::defaults()), y: Some(AxisConfig::defaults()) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
}

impl AxisConfig {
    pub fn defaults() -> Self {
        Self {
            display: Some(true),
            min: None,
            max: None,
            grid: Some(GridOptions {
                display: Some(true),
                color: Some(Color::rgba(0, 0, 0, 26)),
                line_width: Some(1.0),
            }),
            ticks: Some(TickOptions {
                display: Some(true),
                color: Some(Color::rgb(0x66, 0x66, 0x66)),
                font: Some(FontOptions { size: Some(10.0), family: Some(DEFAULT_FONT_FAMILY.to_string()) }),
            }),
        }
    }

    pub fn is_displayed(&self) -> bool {
        self.display.unwrap_or(false)
    }

    pub fn grid_displayed(&self) -> bool {
        self.grid.as_ref().and_then(|g| g.display).unwrap_or(false)
    }

    pub fn ticks_displayed(&self) -> bool {
        self.ticks.as_ref().and_then(|t| t.display).unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontOptions>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FontOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

impl FontOptions {
    /// Concrete font, using `default_size` and Arial for missing fields.
    pub fn resolve(font: Option<&FontOptions>, default_size: f64) -> Font {
        let size = font.and_then(|f| f.size).unwrap_or(default_size);
        let family = font.and_then(|f| f.family.clone()).unwrap_or_else(|| "Arial".to_string());
        Font::new(size, family)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

impl LegendOptions {
    pub fn defaults() -> Self {
        Self {
            display: Some(true),
            position: Some(LegendPosition::Top),
            labels: Some(LegendLabels {
                color: Some(Color::rgb(0x33, 0x33, 0x33)),
                font: Some(FontOptions { size: Some(12.0), family: Some(DEFAULT_FONT_FAMILY.to_string()) }),
            }),
        }
    }

    pub fn is_displayed(&self) -> bool {
        self.display.unwrap_or(false)
    }

    pub fn label_color(&self) -> Color {
        self.labels.as_ref().and_then(|l| l.color).unwrap_or(Color::rgb(0x33, 0x33, 0x33))
    }

    pub fn label_font(&self) -> Font {
        FontOptions::resolve(self.labels.as_ref().and_then(|l| l.font.as_ref()), 12.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontOptions>,
}

/// Tooltip settings. Parsed and defaulted; the draw path does not read them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

impl TooltipOptions {
    pub fn defaults() -> Self {
        Self {
            enabled: Some(true),
            background_color: Some(Color::rgba(0, 0, 0, 204)),
            title_color: Some(Color::WHITE),
            body_color: Some(Color::WHITE),
            border_color: Some(Color::rgba(255, 255, 255, 26)),
            border_width: Some(1.0),
        }
    }
}

/// Applies default option groups where the caller omitted them.
#[derive(Clone, Copy, Debug)]
pub struct OptionsBuilder {
    cartesian: bool,
}

impl OptionsBuilder {
    /// Builder for the chart `type` tag. Unknown tags get no scale defaults.
    pub fn for_type(tag: &str) -> Self {
        let cartesian = tag.parse::<ChartType>().map(|t| t.is_cartesian()).unwrap_or(false);
        Self { cartesian }
    }

    pub fn build(&self, user: Option<Options>) -> Options {
        let user = user.unwrap_or_default();
        let scales = if self.cartesian {
            user.scales.or_else(|| Some(Scales::defaults()))
        } else {
            user.scales
        };
        Options {
            responsive: user.responsive.or(Some(true)),
            maintain_aspect_ratio: user.maintain_aspect_ratio.or(Some(false)),
            background_color: user.background_color.or(Some(Color::WHITE)),
            animation: user.animation.or_else(|| Some(AnimationOptions::defaults())),
            scales,
            legend: user.legend.or_else(|| Some(LegendOptions::defaults())),
            tooltip: user.tooltip.or_else(|| Some(TooltipOptions::defaults())),
            padding: user.padding.or(Some(Padding::uniform(crate::types::DEFAULT_PADDING))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_type_roundtrip() {
        for t in ChartType::ALL {
            assert_eq!(t.as_str().parse::<ChartType>().unwrap(), t);
        }
        assert!(matches!("radar".parse::<ChartType>(), Err(ChartError::UnsupportedChartType(s)) if s == "radar"));
    }

    #[test]
    fn cartesian_types_get_scale_defaults() {
        for t in ChartType::ALL {
            let opts = OptionsBuilder::for_type(t.as_str()).build(None);
            assert_eq!(opts.scales.is_some(), t.is_cartesian(), "{t}");
            assert!(opts.legend_displayed());
        }
    }

    #[test]
    fn user_group_replaces_default_group() {
        let user = Options {
            legend: Some(LegendOptions { display: Some(false), ..LegendOptions::default() }),
            animation: Some(AnimationOptions { duration: None, easing: Some(Easing::Linear) }),
            ..Options::default()
        };
        let opts = OptionsBuilder::for_type("bar").build(Some(user));
        assert!(!opts.legend_displayed());
        assert_eq!(opts.legend.as_ref().unwrap().position, None);
        assert_eq!(opts.animation_duration(), 0.0);
        assert_eq!(opts.background_color, Some(Color::WHITE));
    }

    #[test]
    fn merge_is_shallow() {
        let base = ChartConfig::new(ChartType::Bar, ChartData::new(["A"], vec![Dataset::values(vec![1.0])]))
            .with_defaults();
        let merged = base.clone().merge(PartialConfig::chart_type(ChartType::Pie));
        assert_eq!(merged.chart_type, "pie");
        assert_eq!(merged.data, base.data);
        assert_eq!(merged.options, base.options);
    }

    #[test]
    fn data_series_views() {
        let pts = DataSeries::Points(vec![DataPoint::new(1.0, 2.0), DataPoint::new(3.0, 4.0)]);
        assert_eq!(pts.values(), vec![2.0, 4.0]);
        assert_eq!(pts.len(), 2);
        assert!(DataSeries::Values(vec![1.0]).points().is_empty());
    }
}

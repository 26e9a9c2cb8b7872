//! Renderer-agnostic chart specifications.
//!
//! A [`ChartSpec`] describes one chart completely (kind, data series, axis
//! bindings, colors, tooltip format, title) without naming any rendering
//! technology. The presentation shell consumes serialized specs and owns
//! everything visual beyond what is fixed here. A new spec is built per
//! render and never patched.

use serde::Serialize;

/// The chart kinds the dashboard renders
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Choropleth,
    Line,
    HorizontalBar,
    Pie,
}

/// How the shell formats `{value}` in hover text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ValueFormat {
    /// Tonnes per capita: 2 decimal places ("8.10")
    PerCapita,
    /// Aggregate million tonnes: thousands-grouped, 2 decimals ("14,979.60")
    MillionTonnes,
}

/// One data point within a series.
///
/// Charts use the fields they need: lines bind `x` (year), bars and pies
/// bind `label`, the choropleth binds `label` (ISO code), `frame`
/// (animation year), and `hover_name` (country).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_name: Option<String>,
    /// Per-point color (pie slices); series color applies otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DataPoint {
    /// A numeric-x point (trend lines)
    pub fn at(x: f64, value: f64) -> Self {
        Self {
            x: Some(x),
            label: None,
            value,
            frame: None,
            hover_name: None,
            color: None,
        }
    }

    /// A labeled point (bars, pie slices)
    pub fn labeled(label: impl Into<String>, value: f64) -> Self {
        Self {
            x: None,
            label: Some(label.into()),
            value,
            frame: None,
            hover_name: None,
            color: None,
        }
    }
}

/// A named, colored run of data points
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub points: Vec<DataPoint>,
}

/// A complete, immutable description of one chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// Tooltip template; `{label}`, `{hover_name}`, and `{value}` are
    /// substituted by the shell, `{value}` per `value_format`
    pub hover_template: String,
    pub value_format: ValueFormat,
    /// Color scale bounds for the choropleth; values outside are clamped
    /// visually, never removed from the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_range: Option<[f64; 2]>,
    /// Continuous color scale name for the choropleth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scale: Option<&'static str>,
    /// Renderer template name ("seaborn"), if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<&'static str>,
    pub show_legend: bool,
}

/// Format a value the way the shell is asked to render `{value}`
pub fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::PerCapita => format!("{value:.2}"),
        ValueFormat::MillionTonnes => group_thousands(value),
    }
}

/// Thousands-grouped, 2 decimal places: 14979.6 → "14,979.60"
fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

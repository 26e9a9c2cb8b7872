//! The five chart builders.
//!
//! Each builder is a pure function from one projection (plus the display
//! configuration) to a [`ChartSpec`]. Builders fix the value-domain bounds,
//! tooltip formats, and category colors; they never see the dataset.

use crate::chart::palette::{series_color, source_color, CHOROPLETH_SCALE};
use crate::chart::spec::{ChartKind, ChartSpec, DataPoint, Series, ValueFormat};
use crate::constants::{CHOROPLETH_COLOR_RANGE, RANKING_SIZE, SNAPSHOT_YEAR, YEAR_MIN};
use crate::transform::{ChoroplethPoint, RankedRow, SourceSlice, TrendPoint};
use crate::types::{DashboardConfig, EmissionSource, SortDirection};

/// Animated per-capita world map, one frame per year.
pub fn build_choropleth(points: &[ChoroplethPoint], config: &DashboardConfig) -> ChartSpec {
    let co2 = config.label_style.co2();
    let series_name = format!("{co2} Per Capita (Tonnes)");

    let points = points
        .iter()
        .map(|p| DataPoint {
            x: None,
            label: Some(p.iso_code.clone()),
            value: p.value,
            frame: Some(p.year),
            hover_name: Some(p.country.clone()),
            color: None,
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Choropleth,
        title: format!("Per Capita {co2} Emissions, {YEAR_MIN}-{SNAPSHOT_YEAR}"),
        x_label: "Year".to_string(),
        y_label: series_name.clone(),
        series: vec![Series {
            name: series_name,
            color: None,
            points,
        }],
        hover_template: "{hover_name}: {value}".to_string(),
        value_format: ValueFormat::PerCapita,
        color_range: Some([CHOROPLETH_COLOR_RANGE.0, CHOROPLETH_COLOR_RANGE.1]),
        color_scale: Some(CHOROPLETH_SCALE),
        template: None,
        show_legend: false,
    }
}

/// Per-capita trend line, one series per selected country.
pub fn build_trend_line(points: &[TrendPoint], config: &DashboardConfig) -> ChartSpec {
    let co2 = config.label_style.co2();

    // One series per country, first-seen order for stable coloring
    let mut series: Vec<Series> = Vec::new();
    for point in points {
        let idx = match series.iter().position(|s| s.name == point.country) {
            Some(idx) => idx,
            None => {
                series.push(Series {
                    name: point.country.clone(),
                    color: Some(series_color(series.len()).to_string()),
                    points: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[idx].points.push(DataPoint::at(point.year as f64, point.value));
    }

    ChartSpec {
        kind: ChartKind::Line,
        title: format!("The Trend of {co2} Emissions Per Capita Around World"),
        x_label: "Year".to_string(),
        y_label: format!("{co2} Per Capita (Tonnes)"),
        series,
        hover_template: format!("{co2} Per Capita: {{value}} Tonne"),
        value_format: ValueFormat::PerCapita,
        color_range: None,
        color_scale: None,
        template: config.theme.template(),
        show_legend: true,
    }
}

/// Horizontal ranked bar chart; the title and axis reflect the direction.
///
/// Rows arrive in ascending value order and stay that way, so the largest
/// bar renders at the top of a horizontal ranking.
pub fn build_ranked_bar(
    rows: &[RankedRow],
    direction: SortDirection,
    config: &DashboardConfig,
) -> ChartSpec {
    let co2 = config.label_style.co2();

    let points = rows
        .iter()
        .map(|r| DataPoint::labeled(r.country.clone(), r.value))
        .collect();

    ChartSpec {
        kind: ChartKind::HorizontalBar,
        title: format!(
            "Top {RANKING_SIZE} Country with The {} {co2} Emission Per Capita {SNAPSHOT_YEAR}",
            direction.label()
        ),
        x_label: format!("{co2} Per Capita (Tonnes)"),
        y_label: String::new(),
        series: vec![Series {
            name: format!("{} emitters", direction.label()),
            color: Some(series_color(0).to_string()),
            points,
        }],
        hover_template: format!("{co2} Per Capita: {{value}} Tonne"),
        value_format: ValueFormat::PerCapita,
        color_range: None,
        color_scale: None,
        template: config.theme.template(),
        show_legend: false,
    }
}

/// Source-breakdown trend: six fixed-color series over time.
pub fn build_source_trend(slices: &[SourceSlice], config: &DashboardConfig) -> ChartSpec {
    let co2 = config.label_style.co2();

    let series = EmissionSource::ALL
        .into_iter()
        .map(|source| Series {
            name: source.display_name().to_string(),
            color: Some(source_color(source).to_string()),
            points: slices
                .iter()
                .filter(|s| s.source == source)
                .map(|s| DataPoint::at(s.year as f64, s.value))
                .collect(),
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Line,
        title: format!("The Trend of {co2} Emissions' Source"),
        x_label: "Year".to_string(),
        y_label: format!("{co2} Emissions (in Million Tonnes)"),
        series,
        hover_template: format!("{co2}: {{value}}"),
        value_format: ValueFormat::MillionTonnes,
        color_range: None,
        color_scale: None,
        template: config.theme.template(),
        show_legend: true,
    }
}

/// Proportional pie of the six sources for the snapshot year.
pub fn build_source_pie(slices: &[SourceSlice], config: &DashboardConfig) -> ChartSpec {
    let co2 = config.label_style.co2();

    let points = slices
        .iter()
        .map(|s| DataPoint {
            x: None,
            label: Some(s.source.display_name().to_string()),
            value: s.value,
            frame: None,
            hover_name: None,
            color: Some(source_color(s.source).to_string()),
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Pie,
        title: format!("The Source of {co2} Emissions in {SNAPSHOT_YEAR}"),
        x_label: String::new(),
        y_label: String::new(),
        series: vec![Series {
            name: "Sources".to_string(),
            color: None,
            points,
        }],
        hover_template: format!("{{label}}: {co2} (in million Tonnes): {{value}}"),
        value_format: ValueFormat::MillionTonnes,
        color_range: None,
        color_scale: None,
        template: config.theme.template(),
        show_legend: true,
    }
}

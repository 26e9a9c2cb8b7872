//! Full pipeline workflows: startup pass, reactive updates, recovery.

use crate::helpers::{init_tracing, sample_csv};
use anyhow::Result;
use carbonboard::chart::ChartKind;
use carbonboard::controller::{ChartSlot, Controller};
use carbonboard::data::parse_dataset;
use carbonboard::types::{DashboardConfig, InputEvent, LabelStyle, SortDirection};
use std::collections::BTreeSet;
use std::sync::Arc;

fn selection(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn startup() -> Result<Controller> {
    init_tracing();
    let dataset = Arc::new(parse_dataset(&sample_csv())?);
    Ok(Controller::new(dataset, DashboardConfig::default())?)
}

#[test]
fn test_startup_pass_renders_all_five_charts() -> Result<()> {
    let controller = startup()?;
    let dashboard = controller.dashboard();

    assert_eq!(dashboard.choropleth.kind, ChartKind::Choropleth);
    assert_eq!(dashboard.trend.kind, ChartKind::Line);
    assert_eq!(dashboard.ranking.kind, ChartKind::HorizontalBar);
    assert_eq!(dashboard.source_trend.kind, ChartKind::Line);
    assert_eq!(dashboard.source_pie.kind, ChartKind::Pie);

    // Trend starts on the "World" aggregate
    assert_eq!(dashboard.trend.series.len(), 1);
    assert_eq!(dashboard.trend.series[0].name, "World");
    // The pre-1980 row is filtered out
    assert_eq!(dashboard.trend.series[0].points.len(), 2);

    // Ranking starts on Highest: ascending values, largest (Qatar) last
    let ranking = &dashboard.ranking.series[0].points;
    assert_eq!(ranking.last().unwrap().label.as_deref(), Some("Qatar"));
    assert!(ranking.windows(2).all(|w| w[0].value <= w[1].value));

    // Choropleth keeps both in-window years for animation, drops 1979
    let map_points = &dashboard.choropleth.series[0].points;
    assert!(map_points.iter().any(|p| p.frame == Some(2020)));
    assert!(map_points.iter().any(|p| p.frame == Some(2021)));
    assert!(map_points.iter().all(|p| p.frame != Some(1979)));
    assert!(map_points.iter().any(|p| p.label.as_deref() == Some("QAT")));
    Ok(())
}

#[test]
fn test_country_event_recomputes_only_the_trend_chart() -> Result<()> {
    let mut controller = startup()?;
    let before_map = controller.current(ChartSlot::Choropleth).clone();
    let before_ranking = controller.current(ChartSlot::Ranking).clone();
    let before_pie = controller.current(ChartSlot::SourcePie).clone();

    let spec = controller
        .handle(InputEvent::CountrySelectionChanged(selection(&[
            "Qatar", "Aruba",
        ])))?
        .clone();

    let names: Vec<&str> = spec.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Qatar", "Aruba"]);

    assert_eq!(controller.current(ChartSlot::Trend), &spec);
    assert_eq!(controller.current(ChartSlot::Choropleth), &before_map);
    assert_eq!(controller.current(ChartSlot::Ranking), &before_ranking);
    assert_eq!(controller.current(ChartSlot::SourcePie), &before_pie);
    Ok(())
}

#[test]
fn test_sort_event_flips_the_ranking() -> Result<()> {
    let mut controller = startup()?;

    let spec = controller
        .handle(InputEvent::SortDirectionChanged(SortDirection::Lowest))?
        .clone();

    assert!(spec.title.contains("Lowest"));
    // Only three eligible rows, so "fewer than n" applies: all three come
    // back, still ascending
    let labels: Vec<&str> = spec.series[0]
        .points
        .iter()
        .filter_map(|p| p.label.as_deref())
        .collect();
    assert_eq!(labels, vec!["World", "Aruba", "Qatar"]);
    assert!(spec.series[0].points.windows(2).all(|w| w[0].value <= w[1].value));
    Ok(())
}

#[test]
fn test_rejected_selection_keeps_previous_chart_displayed() -> Result<()> {
    let mut controller = startup()?;

    // First event publishes a valid chart
    controller.handle(InputEvent::CountrySelectionChanged(selection(&["World"])))?;
    let published = controller.current(ChartSlot::Trend).clone();

    // Second event with an empty selection is rejected
    let err = controller
        .handle(InputEvent::CountrySelectionChanged(BTreeSet::new()))
        .unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(controller.current(ChartSlot::Trend), &published);

    // Unknown countries are rejected the same way
    let err = controller
        .handle(InputEvent::CountrySelectionChanged(selection(&["Atlantis"])))
        .unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(controller.current(ChartSlot::Trend), &published);
    Ok(())
}

#[test]
fn test_repeated_events_yield_identical_specs() -> Result<()> {
    let mut controller = startup()?;

    let first = controller
        .handle(InputEvent::CountrySelectionChanged(selection(&["Qatar"])))?
        .clone();
    controller.handle(InputEvent::CountrySelectionChanged(selection(&["World"])))?;
    let second = controller
        .handle(InputEvent::CountrySelectionChanged(selection(&["Qatar"])))?
        .clone();

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_dashboard_serializes_for_the_shell() -> Result<()> {
    let controller = startup()?;

    let json = serde_json::to_value(controller.dashboard())?;
    assert!(json["choropleth"]["color_range"].is_array());
    assert_eq!(json["ranking"]["kind"], "HorizontalBar");
    assert_eq!(json["trend"]["series"][0]["name"], "World");
    Ok(())
}

#[test]
fn test_plain_label_config_applies_everywhere() -> Result<()> {
    init_tracing();
    let dataset = Arc::new(parse_dataset(&sample_csv())?);
    let config = DashboardConfig::new().with_label_style(LabelStyle::Plain);
    let controller = Controller::new(dataset, config)?;

    let dashboard = controller.dashboard();
    assert!(dashboard.trend.title.contains("CO2"));
    assert!(!dashboard.trend.title.contains("CO₂"));
    assert!(dashboard.source_pie.title.contains("CO2"));
    Ok(())
}

//! Property-style tests for the view transformers and their builders.

use crate::helpers::TestDatasetBuilder;
use carbonboard::chart::{build_ranked_bar, build_source_trend, build_trend_line};
use carbonboard::transform::{
    global_trend_by_country, source_breakdown_for_year, source_breakdown_over_time,
    top_n_by_per_capita,
};
use carbonboard::types::{DashboardConfig, EmissionSource, SortDirection};
use std::collections::BTreeSet;

fn selection(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_trend_projection_contains_only_selected_recent_present_rows() {
    let ds = TestDatasetBuilder::new()
        .with_per_capita("World", "", 1975, 3.9)
        .with_per_capita("World", "", 1990, 4.1)
        .with_per_capita("World", "", 2021, 4.7)
        .with_per_capita("Qatar", "QAT", 2021, 35.6)
        .with_per_capita("Aruba", "ABW", 2021, 8.1)
        .build();

    let wanted = selection(&["World", "Aruba"]);
    let points = global_trend_by_country(&ds, &wanted).unwrap();

    assert!(!points.is_empty());
    for point in &points {
        assert!(wanted.contains(&point.country));
        assert!(point.year >= 1980);
        assert!(point.value.is_finite());
    }
    assert!(points.iter().all(|p| p.country != "Qatar"));
}

#[test]
fn test_top_n_counts_order_and_disjointness() {
    let mut builder = TestDatasetBuilder::new();
    for i in 0..30 {
        builder = builder.with_per_capita(&format!("C{i:02}"), "", 2021, (i as f64) * 1.1);
    }
    let ds = builder.build();

    let highest = top_n_by_per_capita(&ds, 2021, SortDirection::Highest, 10);
    let lowest = top_n_by_per_capita(&ds, 2021, SortDirection::Lowest, 10);

    assert_eq!(highest.len(), 10);
    assert_eq!(lowest.len(), 10);
    assert!(highest.windows(2).all(|w| w[0].value <= w[1].value));
    assert!(lowest.windows(2).all(|w| w[0].value <= w[1].value));

    let high_set: BTreeSet<&str> = highest.iter().map(|r| r.country.as_str()).collect();
    assert!(lowest.iter().all(|r| !high_set.contains(r.country.as_str())));
}

#[test]
fn test_ranking_scenario_ascending_with_largest_last() {
    // Dataset {(A,2021,5.0),(B,2021,1.0),(C,2021,9.0)} → Highest n=2 is
    // [A(5.0), C(9.0)] with C last
    let ds = TestDatasetBuilder::new()
        .with_per_capita("A", "", 2021, 5.0)
        .with_per_capita("B", "", 2021, 1.0)
        .with_per_capita("C", "", 2021, 9.0)
        .build();

    let rows = top_n_by_per_capita(&ds, 2021, SortDirection::Highest, 2);
    let spec = build_ranked_bar(&rows, SortDirection::Highest, &DashboardConfig::default());

    let labels: Vec<&str> = spec.series[0]
        .points
        .iter()
        .filter_map(|p| p.label.as_deref())
        .collect();
    assert_eq!(labels, vec!["A", "C"]);
    assert_eq!(spec.series[0].points[0].value, 5.0);
    assert_eq!(spec.series[0].points[1].value, 9.0);
}

#[test]
fn test_source_reshape_is_a_true_partition_of_the_year_total() {
    let ds = TestDatasetBuilder::new()
        .with_sources("USA", 2021, [1000.0, 2000.0, 1500.0, 40.0, 30.0, 20.0])
        .with_sources("China", 2021, [8000.0, 1500.0, 700.0, 800.0, 10.0, 90.0])
        .with_sources("USA", 2020, [1100.0, 1900.0, 1400.0, 38.0, 28.0, 18.0])
        .build();

    let year_total: f64 = ds
        .records()
        .iter()
        .filter(|r| r.year == 2021)
        .flat_map(|r| EmissionSource::ALL.map(|s| r.source_value(s).unwrap_or(0.0)))
        .sum();

    let slices = source_breakdown_for_year(&ds, 2021);
    let slice_total: f64 = slices.iter().map(|s| s.value).sum();

    assert_eq!(slices.len(), 6);
    assert!((slice_total - year_total).abs() < 1e-9);
}

#[test]
fn test_transformer_builder_pairs_are_idempotent() {
    let ds = TestDatasetBuilder::new()
        .with_per_capita("World", "", 2020, 4.5)
        .with_per_capita("World", "", 2021, 4.7)
        .with_sources("World", 2021, [100.0, 90.0, 80.0, 7.0, 6.0, 5.0])
        .build();
    let config = DashboardConfig::default();
    let wanted = selection(&["World"]);

    let trend_a = build_trend_line(&global_trend_by_country(&ds, &wanted).unwrap(), &config);
    let trend_b = build_trend_line(&global_trend_by_country(&ds, &wanted).unwrap(), &config);
    assert_eq!(trend_a, trend_b);

    let sources_a = build_source_trend(&source_breakdown_over_time(&ds, 1980), &config);
    let sources_b = build_source_trend(&source_breakdown_over_time(&ds, 1980), &config);
    assert_eq!(sources_a, sources_b);
}

//! Fixed color mappings for the dashboard's charts.
//!
//! The source → color map is stable across renders so the same emission
//! source always gets the same color, whatever subset of sources a chart
//! shows.

use crate::types::EmissionSource;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Rotating palette for per-country trend series
pub const SERIES_COLORS: [&str; 8] = [
    "#1f77b4", // blue
    "#2ca02c", // green
    "#ff7f0e", // orange
    "#9467bd", // violet
    "#d62728", // red
    "#17becf", // cyan
    "#bcbd22", // olive
    "#e377c2", // pink
];

/// Continuous color scale for the choropleth
pub const CHOROPLETH_SCALE: &str = "OrRd";

static SOURCE_COLORS: Lazy<HashMap<EmissionSource, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (EmissionSource::Coal, "#b43b1f"),
        (EmissionSource::Oil, "#32465f"),
        (EmissionSource::Gas, "#3e8dae"),
        (EmissionSource::Cement, "#6ed5dc"),
        (EmissionSource::Flaring, "#ffad4e"),
        (EmissionSource::OtherIndustry, "#f05129"),
    ])
});

/// The fixed color for one emission source
pub fn source_color(source: EmissionSource) -> &'static str {
    SOURCE_COLORS[&source]
}

/// Color for the n-th series of a multi-country chart
pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

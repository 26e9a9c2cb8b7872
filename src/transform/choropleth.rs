//! Choropleth projection: per-capita values for every country and year,
//! keyed by ISO code for the time-stepped map.

use crate::constants::YEAR_MIN;
use crate::types::Dataset;

/// One map cell for one animation frame
#[derive(Clone, Debug, PartialEq)]
pub struct ChoroplethPoint {
    pub iso_code: String,
    pub year: i32,
    pub country: String,
    pub value: f64,
}

/// Project `(iso_code, year, country, value)` for every year ≥ [`YEAR_MIN`].
///
/// All years are preserved so the map can be animated frame by frame. Rows
/// without an ISO code (aggregates like "World") or without a per-capita
/// value cannot be drawn on the map and are dropped; out-of-range values
/// are kept, since clamping to the color scale happens in the chart builder.
pub fn per_capita_choropleth_series(dataset: &Dataset) -> Vec<ChoroplethPoint> {
    dataset
        .records()
        .iter()
        .filter(|r| r.year >= YEAR_MIN && !r.iso_code.is_empty())
        .filter_map(|r| {
            r.co2_per_capita.map(|value| ChoroplethPoint {
                iso_code: r.iso_code.clone(),
                year: r.year,
                country: r.country.clone(),
                value,
            })
        })
        .collect()
}

//! Per-capita trend projection for a set of selected countries.

use crate::constants::YEAR_MIN;
use crate::data::{DataError, DataResult};
use crate::types::Dataset;
use std::collections::BTreeSet;

/// One point of the per-country trend line
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub country: String,
    pub value: f64,
}

/// Project per-capita values since [`YEAR_MIN`] for the selected countries.
///
/// Rows with a missing per-capita value are dropped. The selection must be
/// non-empty ([`DataError::EmptySelection`]) and, on a non-empty dataset,
/// must only name countries that exist in it
/// ([`DataError::UnknownCountries`]); both are recoverable, and the
/// controller keeps the previous chart.
pub fn global_trend_by_country(
    dataset: &Dataset,
    selection: &BTreeSet<String>,
) -> DataResult<Vec<TrendPoint>> {
    if selection.is_empty() {
        return Err(DataError::EmptySelection);
    }

    if !dataset.is_empty() {
        let unknown: Vec<String> = selection
            .iter()
            .filter(|name| !dataset.contains_country(name))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(DataError::UnknownCountries { names: unknown });
        }
    }

    let points = dataset
        .records()
        .iter()
        .filter(|r| r.year >= YEAR_MIN && selection.contains(&r.country))
        .filter_map(|r| {
            r.co2_per_capita.map(|value| TrendPoint {
                year: r.year,
                country: r.country.clone(),
                value,
            })
        })
        .collect();

    Ok(points)
}

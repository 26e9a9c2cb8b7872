//! Long-form source-breakdown projection: per-year sums of the six
//! emission-source columns across all countries.

use crate::types::{Dataset, EmissionSource};
use std::collections::BTreeMap;

/// One `(year, source, value)` triple of the long-form reshape
#[derive(Clone, Debug, PartialEq)]
pub struct SourceSlice {
    pub year: i32,
    pub source: EmissionSource,
    pub value: f64,
}

/// Sum each source column per year (for years ≥ `year_min`) and reshape
/// wide → long.
///
/// Missing cells contribute nothing to a sum; a year whose cells are all
/// missing still appears with zero totals. Output is ordered by source
/// display order, then year ascending, so the six series come out
/// contiguous and deterministic.
pub fn source_breakdown_over_time(dataset: &Dataset, year_min: i32) -> Vec<SourceSlice> {
    let mut totals: BTreeMap<i32, [f64; 6]> = BTreeMap::new();

    for record in dataset.records() {
        if record.year < year_min {
            continue;
        }
        let sums = totals.entry(record.year).or_insert([0.0; 6]);
        for (slot, source) in sums.iter_mut().zip(EmissionSource::ALL) {
            if let Some(value) = record.source_value(source) {
                *slot += value;
            }
        }
    }

    let mut slices = Vec::with_capacity(totals.len() * EmissionSource::ALL.len());
    for (idx, source) in EmissionSource::ALL.into_iter().enumerate() {
        for (&year, sums) in &totals {
            slices.push(SourceSlice {
                year,
                source,
                value: sums[idx],
            });
        }
    }
    slices
}

/// The breakdown restricted to a single year (feeds the proportional pie).
///
/// A year absent from the dataset yields an empty projection.
pub fn source_breakdown_for_year(dataset: &Dataset, year: i32) -> Vec<SourceSlice> {
    source_breakdown_over_time(dataset, year)
        .into_iter()
        .filter(|slice| slice.year == year)
        .collect()
}

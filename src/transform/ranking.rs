//! Ranked per-capita projection for the horizontal bar chart.

use crate::types::{Dataset, SortDirection};

/// One bar of the ranking chart; rows are kept in ascending value order so
/// the largest value renders at the top of the horizontal chart.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedRow {
    pub country: String,
    pub value: f64,
}

/// Project the `n` highest or lowest per-capita emitters for one year.
///
/// Rows with a missing per-capita value are dropped, then the remainder is
/// sorted ascending by value with a stable sort (ties keep input order).
/// `Highest` takes the last `n` rows (still ascending, largest last);
/// `Lowest` takes the first `n`. Fewer than `n` eligible rows yields fewer
/// bars, never an error.
pub fn top_n_by_per_capita(
    dataset: &Dataset,
    year: i32,
    direction: SortDirection,
    n: usize,
) -> Vec<RankedRow> {
    let mut rows: Vec<RankedRow> = dataset
        .records()
        .iter()
        .filter(|r| r.year == year)
        .filter_map(|r| {
            r.co2_per_capita.map(|value| RankedRow {
                country: r.country.clone(),
                value,
            })
        })
        .collect();

    rows.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(std::cmp::Ordering::Equal));

    match direction {
        SortDirection::Highest => {
            let skip = rows.len().saturating_sub(n);
            rows.split_off(skip)
        }
        SortDirection::Lowest => {
            rows.truncate(n);
            rows
        }
    }
}

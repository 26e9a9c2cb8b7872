//! Crate-wide constants.
//!
//! Centralizes the fixed parameters of the dashboard pipeline so that
//! transformers, builders, and the controller agree on defaults.

// ============================================================================
// Dataset Window
// ============================================================================

/// First year included in every chart; earlier rows are filtered out.
pub const YEAR_MIN: i32 = 1980;

/// Most recent complete year in the dataset; the ranking and pie charts
/// are snapshots of this year.
pub const SNAPSHOT_YEAR: i32 = 2021;

// ============================================================================
// Chart Defaults
// ============================================================================

/// Number of countries shown in the ranked bar chart
pub const RANKING_SIZE: usize = 10;

/// Choropleth color scale bounds in tonnes per capita.
/// Values outside are clamped visually, never filtered from the data.
pub const CHOROPLETH_COLOR_RANGE: (f64, f64) = (0.0, 20.0);

/// Country preselected in the trend chart at startup
pub const DEFAULT_TREND_COUNTRY: &str = "World";

// ============================================================================
// Required Input Columns
// ============================================================================

/// Columns the loader requires in the source file; anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "country",
    "iso_code",
    "year",
    "co2_per_capita",
    "cement_co2",
    "coal_co2",
    "flaring_co2",
    "gas_co2",
    "oil_co2",
    "other_industry_co2",
];

// ============================================================================
// Shell Boundary Identifiers
// ============================================================================

/// Input identifier for the country multi-select
pub const INPUT_CHOOSE_COUNTRY: &str = "choose_country";

/// Input identifier for the ranking sort toggle
pub const INPUT_BAR_SORT: &str = "bar_sort";

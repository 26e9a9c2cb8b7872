//! Core types for the carbonboard pipeline.
//!
//! This module defines the raw data model loaded from the source file, the
//! emission-source taxonomy, and the typed input events exchanged with the
//! presentation shell.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Raw Data Model
// ============================================================================

/// One row of the source dataset. Immutable once loaded.
///
/// Per-source quantities are in million tonnes; `co2_per_capita` is in
/// tonnes per person. Missing numeric cells are `None`, never zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub country: String,
    /// ISO 3166-1 alpha-3 code; empty for aggregates like "World"
    pub iso_code: String,
    pub year: i32,
    pub co2_per_capita: Option<f64>,
    pub coal: Option<f64>,
    pub oil: Option<f64>,
    pub gas: Option<f64>,
    pub cement: Option<f64>,
    pub flaring: Option<f64>,
    pub other_industry: Option<f64>,
}

impl RawRecord {
    /// Emission quantity for one source category
    pub fn source_value(&self, source: EmissionSource) -> Option<f64> {
        match source {
            EmissionSource::Coal => self.coal,
            EmissionSource::Oil => self.oil,
            EmissionSource::Gas => self.gas,
            EmissionSource::Cement => self.cement,
            EmissionSource::Flaring => self.flaring,
            EmissionSource::OtherIndustry => self.other_industry,
        }
    }
}

/// The full ordered collection of rows for all countries and years.
///
/// Loaded exactly once at startup and never mutated afterwards; every
/// transformer output is a new derived collection.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<RawRecord>,
    country_names: BTreeSet<String>,
}

impl Dataset {
    /// Build a dataset from already-parsed rows, preserving their order.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        let country_names = records.iter().map(|r| r.country.clone()).collect();
        Self {
            records,
            country_names,
        }
    }

    /// All rows in source-file order
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any row belongs to the named country
    pub fn contains_country(&self, name: &str) -> bool {
        self.country_names.contains(name)
    }

    /// Unique country names in first-seen order.
    ///
    /// The shell uses this to populate the country multi-select.
    pub fn countries(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.country.as_str()))
            .map(|r| r.country.as_str())
            .collect()
    }
}

// ============================================================================
// Emission Sources
// ============================================================================

/// The six emission-source categories tracked per row.
///
/// The raw-key ↔ display-name mapping is fixed and bijective; `ALL` gives
/// the stable display order used for series and legends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionSource {
    Coal,
    Oil,
    Gas,
    Cement,
    Flaring,
    OtherIndustry,
}

impl EmissionSource {
    /// All sources in display order
    pub const ALL: [EmissionSource; 6] = [
        EmissionSource::Coal,
        EmissionSource::Oil,
        EmissionSource::Gas,
        EmissionSource::Cement,
        EmissionSource::Flaring,
        EmissionSource::OtherIndustry,
    ];

    /// Column name in the source file
    pub fn raw_key(&self) -> &'static str {
        match self {
            EmissionSource::Coal => "coal_co2",
            EmissionSource::Oil => "oil_co2",
            EmissionSource::Gas => "gas_co2",
            EmissionSource::Cement => "cement_co2",
            EmissionSource::Flaring => "flaring_co2",
            EmissionSource::OtherIndustry => "other_industry_co2",
        }
    }

    /// Human-readable name shown in legends and tooltips
    pub fn display_name(&self) -> &'static str {
        match self {
            EmissionSource::Coal => "Coal",
            EmissionSource::Oil => "Oil",
            EmissionSource::Gas => "Gas",
            EmissionSource::Cement => "Cement",
            EmissionSource::Flaring => "Flaring",
            EmissionSource::OtherIndustry => "Other Industry",
        }
    }

    /// Inverse of [`raw_key`](Self::raw_key)
    pub fn from_raw_key(key: &str) -> Option<EmissionSource> {
        Self::ALL.into_iter().find(|s| s.raw_key() == key)
    }

    /// Inverse of [`display_name`](Self::display_name)
    pub fn from_display_name(name: &str) -> Option<EmissionSource> {
        Self::ALL.into_iter().find(|s| s.display_name() == name)
    }
}

// ============================================================================
// Input Events
// ============================================================================

/// Sort direction for the ranked bar chart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Highest,
    Lowest,
}

impl SortDirection {
    /// Label used in the ranking chart title
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Highest => "Highest",
            SortDirection::Lowest => "Lowest",
        }
    }
}

/// A typed user-input event forwarded by the presentation shell.
///
/// Each event is consumed exactly once by the controller and affects
/// exactly one chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The country multi-select changed (`choose_country`)
    CountrySelectionChanged(BTreeSet<String>),
    /// The ranking sort toggle changed (`bar_sort`)
    SortDirectionChanged(SortDirection),
}

impl InputEvent {
    /// Stable identifier of the shell input that fired this event
    pub fn input_id(&self) -> &'static str {
        match self {
            InputEvent::CountrySelectionChanged(_) => crate::constants::INPUT_CHOOSE_COUNTRY,
            InputEvent::SortDirectionChanged(_) => crate::constants::INPUT_BAR_SORT,
        }
    }
}

// ============================================================================
// Dashboard Configuration
// ============================================================================

/// How "CO₂" is written in titles, labels, and tooltips.
///
/// The original dashboard shipped two near-identical copies differing only
/// in label cosmetics; this collapses them into one parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelStyle {
    /// Unicode subscript: "CO₂"
    #[default]
    Symbol,
    /// ASCII fallback: "CO2"
    Plain,
}

impl LabelStyle {
    pub fn co2(&self) -> &'static str {
        match self {
            LabelStyle::Symbol => "CO₂",
            LabelStyle::Plain => "CO2",
        }
    }
}

/// Visual template applied by the renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartTheme {
    #[default]
    Seaborn,
    Default,
}

impl ChartTheme {
    /// Template name understood by the presentation shell
    pub fn template(&self) -> Option<&'static str> {
        match self {
            ChartTheme::Seaborn => Some("seaborn"),
            ChartTheme::Default => None,
        }
    }
}

/// Display configuration shared by all chart builders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub label_style: LabelStyle,
    pub theme: ChartTheme,
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label_style(mut self, label_style: LabelStyle) -> Self {
        self.label_style = label_style;
        self
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }
}

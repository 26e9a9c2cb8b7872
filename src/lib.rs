//! carbonboard: the data-transformation core of a CO₂ emissions dashboard.
//!
//! The pipeline turns one raw time-series table into five derived chart
//! specifications and regenerates exactly one of them per user-input event:
//!
//! - [`data`] loads the raw table once at startup (read-only afterwards)
//! - [`transform`] derives a minimal projection per chart
//! - [`chart`] turns projections into renderer-agnostic [`chart::ChartSpec`]s
//! - [`controller`] maps input events to the single affected chart
//!
//! The presentation shell (layout, widgets, rendering surface) lives outside
//! this crate: it receives serialized ChartSpecs and routes raw UI
//! interactions back as typed [`types::InputEvent`]s.

pub mod chart;
pub mod constants;
pub mod controller;
pub mod data;
pub mod transform;
pub mod types;

pub use controller::{Controller, Dashboard};
pub use data::{load_dataset, DataError, DataResult};
pub use types::{DashboardConfig, Dataset, InputEvent, SortDirection};

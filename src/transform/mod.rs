//! View transformers: pure functions from the loaded dataset to per-chart
//! projections.
//!
//! Each transformer derives the minimal projection one chart needs
//! (filter, aggregate, reshape) and nothing else. Projections are recomputed
//! on demand and discarded once their chart builder has consumed them.
//! Transformers never mutate the dataset; an empty dataset yields an empty
//! projection rather than an error, except where a required non-empty
//! country selection is violated.

mod choropleth;
mod ranking;
mod sources;
mod trend;

pub use choropleth::*;
pub use ranking::*;
pub use sources::*;
pub use trend::*;

//! Chart specifications and builders.
//!
//! Builders are pure functions from one projection to one [`ChartSpec`].
//! They never read the dataset directly, which is what keeps reactive
//! recomputation localized to a single chart.

mod builders;
mod palette;
mod spec;

pub use builders::*;
pub use palette::*;
pub use spec::*;

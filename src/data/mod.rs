//! Dataset loading and data-operation errors.
//!
//! The loader reads the raw emissions table exactly once at startup; every
//! downstream computation works on the in-memory [`crate::types::Dataset`].
//!
//! ## Error Handling
//!
//! All data operations return `DataResult<T>` using the `DataError` type.
//! Load-time errors are fatal; selection errors are recoverable and leave
//! the previously published chart in place.

mod error;
mod loader;

pub use error::*;
pub use loader::*;

//! Single-component unit tests.

mod loader_tests;
mod projection_tests;

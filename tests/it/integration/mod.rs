//! Multi-component workflow tests.

mod dashboard_workflow_tests;

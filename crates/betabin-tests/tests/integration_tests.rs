//! Integration tests module that includes all integration test files.

#[path = "integration/pipeline_tests.rs"]
mod pipeline_tests;

#[path = "integration/validation_tests.rs"]
mod validation_tests;

#[path = "integration/export_tests.rs"]
mod export_tests;

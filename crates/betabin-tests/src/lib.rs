//! Integration and property tests for the betabin workspace.
//!
//! All tests live under `tests/`; this crate has no library code.

//! The computation engine for Beta-Binomial posteriors.
//!
//! This module provides:
//! - **errors**: Error types for rejected inputs and numerical failures
//! - **params**: Raw and validated model inputs
//! - **validate**: Domain checks run before any numerical work
//! - **grid**: The sample grid over `[0, 1]`
//! - **density**: Beta prior density and binomial likelihood on the grid
//! - **quadrature**: Simpson integration with singular-endpoint correction
//! - **normalize**: Posterior normalization
//! - **interval**: Exact credible-interval probabilities
//! - **compute**: One full computation cycle and its output bundle
//! - **export**: JSON, CSV and text renderings of results

pub mod compute;
pub mod density;
pub mod errors;
pub mod export;
pub mod grid;
pub mod interval;
pub mod normalize;
pub mod params;
pub mod quadrature;
pub mod validate;
